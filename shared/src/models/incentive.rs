//! Incentive Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of incentive or bonus awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveKind {
    Bonus,
    PerformanceIncentive,
    ProjectCompletion,
    MonthlyReward,
    AnnualBonus,
    Other,
}

impl IncentiveKind {
    pub const ALL: [IncentiveKind; 6] = [
        IncentiveKind::Bonus,
        IncentiveKind::PerformanceIncentive,
        IncentiveKind::ProjectCompletion,
        IncentiveKind::MonthlyReward,
        IncentiveKind::AnnualBonus,
        IncentiveKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncentiveKind::Bonus => "bonus",
            IncentiveKind::PerformanceIncentive => "performance incentive",
            IncentiveKind::ProjectCompletion => "project completion",
            IncentiveKind::MonthlyReward => "monthly reward",
            IncentiveKind::AnnualBonus => "annual bonus",
            IncentiveKind::Other => "other",
        }
    }
}

/// Monetary award recorded against an employee.
///
/// Amounts are exact decimals. `approved_by` is always the acting admin's
/// email, set server-side at award time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incentive {
    pub employee_email: String,
    #[serde(rename = "type")]
    pub kind: IncentiveKind,
    pub amount: Decimal,
    pub description: String,
    pub date_awarded: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}
