//! Validation error taxonomy.

use thiserror::Error;

/// A single problem found while validating a submission.
///
/// Errors are values appended to the report, never raised; a run that
/// collects several problems reports all of them in one pass. The display
/// text is the message shown to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested owner organization does not exist.
    #[error("Please update **Repository owner** as {owner} does not exist")]
    OwnerMissing {
        /// Organization name from the submission.
        owner: String,
    },

    /// A repository with the requested name already exists.
    #[error("Please update **Repository name** as {owner}/{name} already exists")]
    RepositoryExists {
        /// Organization name from the submission.
        owner: String,
        /// Requested repository name.
        name: String,
    },

    /// The repository check failed for a reason other than not-found.
    #[error("Issue arose checking if {owner}/{name} already exists; please review workflow logs")]
    RepositoryLookupFailed {
        /// Organization name from the submission.
        owner: String,
        /// Requested repository name.
        name: String,
    },

    /// Non-internal visibility was requested without a justification.
    #[error("Please update **Repository justification** regarding the need for `{visibility}` visibility")]
    JustificationRequired {
        /// The requested visibility.
        visibility: String,
    },

    /// A requested team does not exist.
    #[error("Please update **Repository access** as {org}/{team_slug} does not exist")]
    TeamMissing {
        /// Organization the team was looked up in.
        org: String,
        /// Team slug from the access spec.
        team_slug: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages_name_their_coordinates() {
        let err = ValidationError::OwnerMissing {
            owner: "acme".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please update **Repository owner** as acme does not exist"
        );

        let err = ValidationError::RepositoryExists {
            owner: "acme".into(),
            name: "widgets".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please update **Repository name** as acme/widgets already exists"
        );

        let err = ValidationError::JustificationRequired {
            visibility: "private".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please update **Repository justification** regarding the need for `private` visibility"
        );

        let err = ValidationError::TeamMissing {
            org: "acme".into(),
            team_slug: "platform".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please update **Repository access** as acme/platform does not exist"
        );
    }
}
