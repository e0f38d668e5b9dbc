//! Record-scoped aggregation helpers
//!
//! Pure functions over slices the pages have already fetched from the
//! entity layer. No caching, no queries of their own.

pub mod attendance;
pub mod incentives;
pub mod performance;

pub use attendance::{MonthlyAttendance, monthly_counts};
pub use incentives::{format_amount, total_awarded};
pub use performance::{PerformanceSummary, ScoreBreakdown};
