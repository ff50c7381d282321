//! Intake form submission types.

use serde::{Deserialize, Serialize};

/// Sentinel the intake form reports for a field the requester left blank.
pub const NO_RESPONSE: &str = "*No response*";

/// A repository access request, as submitted through the intake form.
///
/// Constructed once at the boundary and immutable for the duration of a
/// validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequestSubmission {
    /// Organization that will own the new repository.
    pub owner: String,
    /// Desired repository name.
    pub name: String,
    /// Requested visibility, lower-cased (e.g. `internal`, `private`).
    pub visibility: String,
    /// Business justification for non-internal visibility. May be the
    /// [`NO_RESPONSE`] sentinel.
    pub justification: String,
    /// URL-encoded, newline-delimited access grant lines.
    pub access_spec: String,
    /// Free-form repository description. Passed through, never validated.
    pub description: String,
}

impl AccessRequestSubmission {
    /// Create a new submission. The visibility is lower-cased here so every
    /// later comparison can be exact.
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        visibility: impl Into<String>,
        justification: impl Into<String>,
        access_spec: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            visibility: visibility.into().to_lowercase(),
            justification: justification.into(),
            access_spec: access_spec.into(),
            description: description.into(),
        }
    }

    /// Whether the requester provided a justification.
    pub fn has_justification(&self) -> bool {
        self.justification != NO_RESPONSE
    }
}
