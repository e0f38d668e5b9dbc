//! Client for the hosted platform the portal runs on
//!
//! The portal owns no persistence, identity, mail delivery, or file
//! storage; all four are services of the hosting platform, consumed
//! through the narrow traits defined here:
//!
//! - [`EntityStore`] - generic list/filter/create/update over the
//!   schema-defined collections
//! - [`SessionService`] - resolve the current identity from a bearer token
//! - [`MailService`] - outbound email
//! - [`FileStore`] - file upload, returning a reference URL
//!
//! [`PlatformClient`] implements all four over HTTP. The `mock` feature
//! adds [`mock::MockPlatform`], an in-memory backend for tests.

pub mod api;
pub mod client;
pub mod collections;
pub mod error;

#[cfg(feature = "mock")]
pub mod mock;

// Re-exports
pub use api::{EmailMessage, EntityStore, FileStore, MailService, SessionService, UploadedFile};
pub use client::PlatformClient;
pub use collections::{Collection, Entities};
pub use error::{ClientError, ClientResult};
