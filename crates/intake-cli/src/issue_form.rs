//! Issue-form payload parsing.

use intake_core::AccessRequestSubmission;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// A single rendered field of the intake issue form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormField {
    /// The field's rendered text content.
    pub text: String,
}

/// The deserialized issue-form payload, keyed by form field id.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueForm(HashMap<String, FormField>);

/// Errors raised while reading the issue-form payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required form field was absent from the payload.
    #[error("missing required form field '{0}'")]
    MissingField(&'static str),
}

impl IssueForm {
    fn field(&self, name: &'static str) -> Result<&str, FormError> {
        self.0
            .get(name)
            .map(|field| field.text.as_str())
            .ok_or(FormError::MissingField(name))
    }

    /// Convert the loose payload into a typed submission.
    ///
    /// Field presence is checked here, at the boundary; the validation
    /// engine never guesses at optional fields.
    pub fn into_submission(&self) -> Result<AccessRequestSubmission, FormError> {
        Ok(AccessRequestSubmission::new(
            self.field("repository-owner")?,
            self.field("repository-name")?,
            self.field("repository-visibility")?,
            self.field("repository-justification")?,
            self.field("repository-access")?,
            self.field("repository-description")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAYLOAD: &str = r#"{
        "repository-owner": { "text": "acme" },
        "repository-name": { "text": "widgets" },
        "repository-visibility": { "text": "Internal" },
        "repository-justification": { "text": "*No response*" },
        "repository-access": { "text": "platform%2Cwrite" },
        "repository-description": { "text": "Widget pipeline" }
    }"#;

    #[test]
    fn test_payload_parses_into_submission() {
        let form: IssueForm = serde_json::from_str(PAYLOAD).unwrap();
        let submission = form.into_submission().unwrap();

        assert_eq!(submission.owner, "acme");
        assert_eq!(submission.name, "widgets");
        assert_eq!(submission.visibility, "internal");
        assert_eq!(submission.justification, "*No response*");
        assert_eq!(submission.access_spec, "platform%2Cwrite");
        assert_eq!(submission.description, "Widget pipeline");
    }

    #[test]
    fn test_missing_field_is_named() {
        let form: IssueForm = serde_json::from_str(r#"{ "repository-owner": { "text": "acme" } }"#)
            .unwrap();
        let err = form.into_submission().unwrap_err();

        assert_eq!(err, FormError::MissingField("repository-name"));
        assert_eq!(
            err.to_string(),
            "missing required form field 'repository-name'"
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload = PAYLOAD.replacen('{', r#"{ "unrelated": { "text": "x" },"#, 1);
        let form: IssueForm = serde_json::from_str(&payload).unwrap();

        assert!(form.into_submission().is_ok());
    }
}
