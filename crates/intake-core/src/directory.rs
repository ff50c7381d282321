//! Directory service lookup capability.

use async_trait::async_trait;

/// Outcome of a single directory lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The resource exists.
    Found,
    /// The directory answered that the resource does not exist.
    NotFound,
    /// The lookup could not be completed. Carries the HTTP status when the
    /// directory produced one; transport-level failures carry `None`.
    Failed(Option<u16>),
}

impl Lookup {
    /// Whether the resource was confirmed to exist.
    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// External system of record for organizations, repositories, and teams.
///
/// Implementations report existence only; they never create or mutate a
/// remote resource. Every failure mode folds into [`Lookup`] so the
/// validation pass can collect all problems instead of aborting on the
/// first one.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Check whether an organization exists.
    async fn get_org(&self, org: &str) -> Lookup;

    /// Check whether a repository exists under `owner`.
    async fn get_repo(&self, owner: &str, repo: &str) -> Lookup;

    /// Check whether a team exists within `org`.
    async fn get_team(&self, org: &str, team_slug: &str) -> Lookup;
}
