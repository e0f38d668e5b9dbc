//! Incentive aggregation

use rust_decimal::Decimal;

use shared::Incentive;

/// Sum of award amounts over every record supplied.
///
/// The incentives page titles this "Total Earned This Year", but no
/// period filter has ever been applied — the figure is all-time. Kept
/// as-is until product decides otherwise; the tests pin the current
/// behavior.
pub fn total_awarded<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a Incentive>,
{
    records.into_iter().map(|record| record.amount).sum()
}

/// Money display form, always two decimals ("150.50").
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::IncentiveKind;

    fn award(amount: &str, date: &str) -> Incentive {
        Incentive {
            employee_email: "riley@corp.test".into(),
            kind: IncentiveKind::Bonus,
            amount: amount.parse().unwrap(),
            description: "Quarter close".into(),
            date_awarded: date.parse::<NaiveDate>().unwrap(),
            approved_by: Some("hr@corp.test".into()),
        }
    }

    #[test]
    fn totals_format_to_two_decimals() {
        let records = [award("100", "2026-01-10"), award("50.5", "2026-02-11")];
        let total = total_awarded(&records);
        assert_eq!(format_amount(total), "150.50");
    }

    #[test]
    fn incentive_total_is_all_time_despite_label() {
        // Awards from past years still count: no period filter is applied.
        let records = [award("100", "2020-01-10"), award("25", "2026-02-11")];
        assert_eq!(format_amount(total_awarded(&records)), "125.00");
    }

    #[test]
    fn empty_history_totals_zero() {
        let records: [Incentive; 0] = [];
        assert_eq!(format_amount(total_awarded(&records)), "0.00");
    }
}
