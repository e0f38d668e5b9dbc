//! Data models
//!
//! Shared between portal-server and the entity layer client. Field names
//! match the hosted schema exactly; the platform adds `id`/`created_date`
//! on top of these (see [`crate::record::Stored`]).

pub mod attendance;
pub mod incentive;
pub mod notification;
pub mod performance;
pub mod profile;
pub mod update;

// Re-exports
pub use attendance::*;
pub use incentive::*;
pub use notification::*;
pub use performance::*;
pub use profile::*;
pub use update::*;
