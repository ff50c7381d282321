//! Validation engine for repository intake requests.
//!
//! This crate provides:
//! - **Submissions**: Strongly typed intake form data
//! - **Permission normalization**: Mapping user-entered permission tokens to
//!   their API names
//! - **Access-spec parsing**: Turning the free-text access list into
//!   candidate grants
//! - **Validation**: Cross-checking a submission against a directory service
//!   and collecting every problem in one pass
//!
//! # Example
//!
//! ```rust,ignore
//! use intake_core::{validate, AccessRequestSubmission};
//!
//! #[tokio::main]
//! async fn main() {
//!     let submission = AccessRequestSubmission::new(
//!         "acme",
//!         "widgets",
//!         "internal",
//!         "*No response*",
//!         "platform-team%2C%20write",
//!         "Widget pipeline",
//!     );
//!
//!     let report = validate(&submission, &directory).await;
//!     if !report.is_success() {
//!         for error in &report.errors {
//!             eprintln!("{error}");
//!         }
//!     }
//! }
//! ```

mod directory;
mod error;
mod grant;
mod permission;
mod submission;
mod validate;

pub use directory::{DirectoryClient, Lookup};
pub use error::ValidationError;
pub use grant::{parse_access_spec, CandidateGrant};
pub use permission::{normalize_permission, RESERVED_PERMISSIONS};
pub use submission::{AccessRequestSubmission, NO_RESPONSE};
pub use validate::{validate, Assignment, ValidationReport};

/// Version of the intake engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
