//! Shared types for the HR employee portal
//!
//! Domain models, the record envelope used by the hosted entity layer,
//! the query vocabulary (sort / filter / limit) and the unified API
//! response structure. Used by both `portal-client` and `portal-server`.

pub mod models;
pub mod query;
pub mod record;
pub mod response;

// Re-exports
pub use models::*;
pub use query::{Filter, ListQuery, SortSpec};
pub use record::{EntityKind, Stored};
pub use response::ApiResponse;
