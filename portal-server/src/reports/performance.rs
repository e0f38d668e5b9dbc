//! Performance score aggregation

use serde::Serialize;

use shared::PerformanceRecord;

/// Per-dimension arithmetic means over a record window.
///
/// `overall` is the mean of the three per-dimension means (not a weighted
/// mean of all raw values), rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub punctuality: f64,
    pub attitude: f64,
    pub responsiveness: f64,
    pub overall: f64,
}

/// Summary of a performance window.
///
/// An empty window is its own state instead of a masked zero-division;
/// it still renders as 0.0 so the dashboard shows the same number it
/// always has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PerformanceSummary {
    NoData,
    Scored(ScoreBreakdown),
}

impl PerformanceSummary {
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PerformanceRecord>,
    {
        let mut count = 0usize;
        let (mut punctuality, mut attitude, mut responsiveness) = (0.0, 0.0, 0.0);
        for record in records {
            punctuality += record.punctuality;
            attitude += record.attitude;
            responsiveness += record.responsiveness;
            count += 1;
        }

        if count == 0 {
            return PerformanceSummary::NoData;
        }

        let n = count as f64;
        let (punctuality, attitude, responsiveness) =
            (punctuality / n, attitude / n, responsiveness / n);
        let overall = round1((punctuality + attitude + responsiveness) / 3.0);

        PerformanceSummary::Scored(ScoreBreakdown {
            punctuality,
            attitude,
            responsiveness,
            overall,
        })
    }

    /// The number the dashboard displays: 0.0 when there is no data.
    pub fn overall_score(&self) -> f64 {
        match self {
            PerformanceSummary::NoData => 0.0,
            PerformanceSummary::Scored(scores) => scores.overall,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
