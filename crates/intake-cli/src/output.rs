//! Workflow output writing.
//!
//! Outputs use the GitHub Actions `key=value` format, with the heredoc
//! delimiter form for multi-line values. When `$GITHUB_OUTPUT` is unset
//! (local runs), outputs go to stdout instead.

use intake_core::AccessRequestSubmission;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// Writer for workflow output key-value pairs.
pub struct OutputWriter {
    file: Option<File>,
}

impl OutputWriter {
    /// Create a writer for the file named by `$GITHUB_OUTPUT`, falling
    /// back to stdout when the variable is unset.
    pub fn from_env() -> io::Result<Self> {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Self::to_file(file))
            }
            None => Ok(Self::stdout()),
        }
    }

    /// Create a writer appending to the given file.
    pub fn to_file(file: File) -> Self {
        Self { file: Some(file) }
    }

    /// Create a writer printing to stdout.
    pub fn stdout() -> Self {
        Self { file: None }
    }

    /// Write one output value.
    pub fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let line = if value.contains('\n') {
            format!("{key}<<EOF\n{value}\nEOF\n")
        } else {
            format!("{key}={value}\n")
        };

        match &mut self.file {
            Some(file) => file.write_all(line.as_bytes()),
            None => {
                print!("{line}");
                Ok(())
            }
        }
    }

    /// Echo the six submission fields as outputs, before validation runs,
    /// so downstream workflow steps see them even on a failed run.
    pub fn echo_submission(&mut self, submission: &AccessRequestSubmission) -> io::Result<()> {
        self.set("repository-access", &submission.access_spec)?;
        self.set("repository-description", &submission.description)?;
        self.set("repository-justification", &submission.justification)?;
        self.set("repository-name", &submission.name)?;
        self.set("repository-owner", &submission.owner)?;
        self.set("repository-visibility", &submission.visibility)
    }
}
