//! Submission validation orchestration.

use crate::directory::{DirectoryClient, Lookup};
use crate::error::ValidationError;
use crate::grant::parse_access_spec;
use crate::submission::AccessRequestSubmission;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A validated team-permission assignment for the new repository.
///
/// Created only after the directory confirms the team exists, and never
/// mutated afterwards. Field names match the wire format consumed by the
/// provisioning workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Organization owning the team.
    pub org: String,
    /// Team slug within the organization.
    pub team_slug: String,
    /// Organization that will own the new repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Normalized permission, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

/// Result of validating one submission.
///
/// Both lists are always returned. Assignments and errors are independent:
/// a grant that passed stays usable even when other checks failed, and a
/// non-empty error list marks the overall run as failed.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Grants confirmed against the directory.
    pub assignments: Vec<Assignment>,
    /// Every problem found, in check order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Whether the submission passed every check.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a submission against the directory service.
///
/// Runs four independent checks: owner existence, repository
/// non-existence, the justification rule, and per-grant team existence.
/// No check short-circuits another; the report carries every failure so
/// the requester can fix a submission in one round trip.
pub async fn validate(
    submission: &AccessRequestSubmission,
    directory: &impl DirectoryClient,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    // The owner organization must exist. Any failure reads as missing;
    // only the repository check below distinguishes not-found from other
    // failures.
    if !directory.get_org(&submission.owner).await.is_found() {
        report.errors.push(ValidationError::OwnerMissing {
            owner: submission.owner.clone(),
        });
    }

    // The requested name must be free. Finding the repository is the
    // failure condition here; a clean not-found is success.
    match directory.get_repo(&submission.owner, &submission.name).await {
        Lookup::Found => report.errors.push(ValidationError::RepositoryExists {
            owner: submission.owner.clone(),
            name: submission.name.clone(),
        }),
        Lookup::NotFound => {}
        Lookup::Failed(status) => {
            debug!(?status, "repository lookup failed");
            report.errors.push(ValidationError::RepositoryLookupFailed {
                owner: submission.owner.clone(),
                name: submission.name.clone(),
            });
        }
    }

    // Internal visibility never needs a justification.
    if submission.visibility != "internal" && !submission.has_justification() {
        report.errors.push(ValidationError::JustificationRequired {
            visibility: submission.visibility.clone(),
        });
    }

    // Each grant is checked on its own; one missing team does not block
    // the others.
    for grant in parse_access_spec(&submission.access_spec, &submission.owner) {
        if directory.get_team(&grant.org, &grant.team_slug).await.is_found() {
            report.assignments.push(Assignment {
                org: grant.org,
                team_slug: grant.team_slug,
                owner: submission.owner.clone(),
                repo: submission.name.clone(),
                permission: grant.permission,
            });
        } else {
            report.errors.push(ValidationError::TeamMissing {
                org: grant.org,
                team_slug: grant.team_slug,
            });
        }
    }

    info!(
        assignments = report.assignments.len(),
        errors = report.errors.len(),
        "validation complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::NO_RESPONSE;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Directory stub with canned answers per resource.
    struct StubDirectory {
        org: Lookup,
        repo: Lookup,
        teams: HashMap<String, Lookup>,
    }

    impl StubDirectory {
        fn new(org: Lookup, repo: Lookup) -> Self {
            Self {
                org,
                repo,
                teams: HashMap::new(),
            }
        }

        fn with_team(mut self, org: &str, team_slug: &str, lookup: Lookup) -> Self {
            self.teams.insert(format!("{org}/{team_slug}"), lookup);
            self
        }
    }

    #[async_trait]
    impl DirectoryClient for StubDirectory {
        async fn get_org(&self, _org: &str) -> Lookup {
            self.org
        }

        async fn get_repo(&self, _owner: &str, _repo: &str) -> Lookup {
            self.repo
        }

        async fn get_team(&self, org: &str, team_slug: &str) -> Lookup {
            *self
                .teams
                .get(&format!("{org}/{team_slug}"))
                .unwrap_or(&Lookup::NotFound)
        }
    }

    fn submission(visibility: &str, justification: &str, access_spec: &str) -> AccessRequestSubmission {
        AccessRequestSubmission::new(
            "acme",
            "widgets",
            visibility,
            justification,
            access_spec,
            "Widget pipeline",
        )
    }

    #[tokio::test]
    async fn test_clean_submission_passes() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound)
            .with_team("acme", "platform", Lookup::Found);
        let report = validate(&submission("internal", NO_RESPONSE, "platform,write"), &directory).await;

        assert!(report.is_success());
        assert_eq!(
            report.assignments,
            vec![Assignment {
                org: "acme".into(),
                team_slug: "platform".into(),
                owner: "acme".into(),
                repo: "widgets".into(),
                permission: Some("push".into()),
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_owner_is_reported() {
        let directory = StubDirectory::new(Lookup::NotFound, Lookup::NotFound);
        let report = validate(&submission("internal", NO_RESPONSE, ""), &directory).await;

        assert_eq!(
            report.errors,
            vec![ValidationError::OwnerMissing {
                owner: "acme".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_owner_lookup_failure_reads_as_missing() {
        let directory = StubDirectory::new(Lookup::Failed(Some(500)), Lookup::NotFound);
        let report = validate(&submission("internal", NO_RESPONSE, ""), &directory).await;

        assert_eq!(
            report.errors,
            vec![ValidationError::OwnerMissing {
                owner: "acme".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_existing_repository_is_reported() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::Found);
        let report = validate(&submission("internal", NO_RESPONSE, ""), &directory).await;

        assert_eq!(
            report.errors,
            vec![ValidationError::RepositoryExists {
                owner: "acme".into(),
                name: "widgets".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_repository_lookup_failure_gets_distinct_error() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::Failed(Some(500)));
        let report = validate(&submission("internal", NO_RESPONSE, ""), &directory).await;

        assert_eq!(
            report.errors,
            vec![ValidationError::RepositoryLookupFailed {
                owner: "acme".into(),
                name: "widgets".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_non_internal_visibility_requires_justification() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound);
        let report = validate(&submission("private", NO_RESPONSE, ""), &directory).await;

        assert_eq!(
            report.errors,
            vec![ValidationError::JustificationRequired {
                visibility: "private".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_internal_visibility_needs_no_justification() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound);
        let report = validate(&submission("internal", NO_RESPONSE, ""), &directory).await;

        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_provided_justification_satisfies_the_rule() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound);
        let report = validate(&submission("private", "compliance audit", ""), &directory).await;

        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_partial_grant_success_is_preserved() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound)
            .with_team("acme", "platform", Lookup::Found)
            .with_team("acme", "ghosts", Lookup::NotFound);
        let report = validate(
            &submission("internal", NO_RESPONSE, "platform,admin\nghosts,read"),
            &directory,
        )
        .await;

        assert_eq!(report.assignments.len(), 1);
        assert_eq!(report.assignments[0].team_slug, "platform");
        assert_eq!(report.assignments[0].permission, Some("admin".into()));
        assert_eq!(
            report.errors,
            vec![ValidationError::TeamMissing {
                org: "acme".into(),
                team_slug: "ghosts".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_cross_org_team_is_looked_up_in_its_own_org() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound)
            .with_team("org2", "team-a", Lookup::Found);
        let report = validate(
            &submission("internal", NO_RESPONSE, "@org2/team-a,read"),
            &directory,
        )
        .await;

        assert!(report.is_success());
        assert_eq!(report.assignments[0].org, "org2");
        assert_eq!(report.assignments[0].owner, "acme");
        assert_eq!(report.assignments[0].permission, Some("pull".into()));
    }

    #[tokio::test]
    async fn test_grant_without_permission_still_validates() {
        let directory = StubDirectory::new(Lookup::Found, Lookup::NotFound)
            .with_team("acme", "platform", Lookup::Found);
        let report = validate(&submission("internal", NO_RESPONSE, "platform"), &directory).await;

        assert!(report.is_success());
        assert_eq!(report.assignments[0].permission, None);
    }

    #[tokio::test]
    async fn test_all_checks_collect_in_one_pass() {
        let directory = StubDirectory::new(Lookup::NotFound, Lookup::Found)
            .with_team("acme", "ghosts", Lookup::NotFound);
        let report = validate(&submission("public", NO_RESPONSE, "ghosts,read"), &directory).await;

        assert_eq!(report.errors.len(), 4);
        assert!(report.assignments.is_empty());
        assert!(matches!(
            report.errors[0],
            ValidationError::OwnerMissing { .. }
        ));
        assert!(matches!(
            report.errors[1],
            ValidationError::RepositoryExists { .. }
        ));
        assert!(matches!(
            report.errors[2],
            ValidationError::JustificationRequired { .. }
        ));
        assert!(matches!(
            report.errors[3],
            ValidationError::TeamMissing { .. }
        ));
    }
}
