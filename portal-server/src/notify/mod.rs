//! Outbound notification dispatch

pub mod dispatcher;

pub use dispatcher::{DispatchOutcome, dispatch};
