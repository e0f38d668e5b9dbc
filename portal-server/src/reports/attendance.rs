//! Attendance aggregation

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use shared::{Attendance, AttendanceStatus};

/// Per-status day counts for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyAttendance {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub half_day: u32,
}

impl MonthlyAttendance {
    pub fn total(&self) -> u32 {
        self.present + self.absent + self.late + self.half_day
    }
}

/// Count records per status within the calendar month containing `today`
/// (inclusive bounds). The filter runs here, over whatever window the
/// page fetched — the entity layer is not asked for a month slice.
pub fn monthly_counts<'a, I>(records: I, today: NaiveDate) -> MonthlyAttendance
where
    I: IntoIterator<Item = &'a Attendance>,
{
    let (month_start, month_end) = month_bounds(today);
    let mut counts = MonthlyAttendance::default();
    for record in records {
        if record.date < month_start || record.date > month_end {
            continue;
        }
        match record.status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
            AttendanceStatus::Late => counts.late += 1,
            AttendanceStatus::HalfDay => counts.half_day += 1,
        }
    }
    counts
}

fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .expect("first of month is a valid date");
    let (next_year, next_month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is a valid date")
        .pred_opt()
        .expect("last of month is a valid date");
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            employee_email: "riley@corp.test".into(),
            date: date.parse().unwrap(),
            status,
            check_in_time: Some("09:00".into()),
            check_out_time: Some("17:00".into()),
            hours_worked: 8.0,
            notes: String::new(),
        }
    }

    #[test]
    fn counts_only_the_current_calendar_month() {
        let records = [
            day("2026-03-01", AttendanceStatus::Present),
            day("2026-03-31", AttendanceStatus::Late),
            day("2026-03-15", AttendanceStatus::HalfDay),
            day("2026-02-28", AttendanceStatus::Absent),
            day("2026-04-01", AttendanceStatus::Present),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let counts = monthly_counts(&records, today);
        assert_eq!(
            counts,
            MonthlyAttendance {
                present: 1,
                absent: 0,
                late: 1,
                half_day: 1,
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let records = [
            day("2026-12-31", AttendanceStatus::Present),
            day("2027-01-01", AttendanceStatus::Present),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 12, 10).unwrap();
        assert_eq!(monthly_counts(&records, today).present, 1);
    }
}
