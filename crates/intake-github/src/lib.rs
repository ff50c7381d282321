//! GitHub-backed directory lookups.
//!
//! Implements the [`intake_core::DirectoryClient`] capability over the
//! GitHub REST v3 API, reporting existence of organizations, repositories,
//! and teams.

mod client;
mod error;

pub use client::{GitHubDirectory, DEFAULT_API_URL};
pub use error::{ClientError, Result};
