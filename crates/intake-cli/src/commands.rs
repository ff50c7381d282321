//! CLI command implementations.

use crate::issue_form::{FormError, IssueForm};
use crate::output::OutputWriter;
use intake_github::GitHubDirectory;
use thiserror::Error;
use tracing::info;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ISSUE_FORM_JSON is not set and no --input was given")]
    MissingInput,

    #[error("invalid issue-form payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] intake_github::ClientError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Validate an intake submission. Returns whether every check passed.
///
/// Echoes the submission fields as workflow outputs first, then runs the
/// validation engine and emits the `repository-assignments` and `errors`
/// outputs regardless of the outcome.
pub async fn validate(input: Option<&str>, api_url: &str, token: Option<String>) -> Result<bool> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::env::var("ISSUE_FORM_JSON").map_err(|_| CliError::MissingInput)?,
    };

    let form: IssueForm = serde_json::from_str(&raw)?;
    let submission = form.into_submission()?;

    info!(owner = %submission.owner, name = %submission.name, "Validating intake submission");

    let mut output = OutputWriter::from_env()?;
    output.echo_submission(&submission)?;

    let token = token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    let directory = GitHubDirectory::with_base_url(api_url, token)?;

    let report = intake_core::validate(&submission, &directory).await;

    let messages: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
    output.set(
        "repository-assignments",
        &serde_json::to_string(&report.assignments)?,
    )?;
    output.set("errors", &serde_json::to_string(&messages)?)?;

    if !report.is_success() {
        for message in &messages {
            eprintln!("{message}");
        }
        eprintln!(
            "{} errors were found in validating inputs; please follow up as appropriately.",
            report.errors.len()
        );
    }

    Ok(report.is_success())
}
