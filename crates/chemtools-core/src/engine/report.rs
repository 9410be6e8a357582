use super::error::ValidationError;
use crate::core::keys::{ElementType, KeyError};
use thiserror::Error;

/// One broken rule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    #[error("archive contains no arrays")]
    EmptyArchive,

    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("invalid key '{key}': {source}")]
    InvalidKey { key: String, source: KeyError },

    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String },

    #[error("'{key}' must hold {expected} values, found {found}")]
    WrongElementType {
        key: String,
        expected: ElementType,
        found: ElementType,
    },

    #[error("'{key}' must have shape {expected}, found {found:?}")]
    WrongShape {
        key: String,
        expected: &'static str,
        found: Vec<usize>,
    },

    #[error("'{key}' has {found} entries but '{reference}' has {expected}")]
    LengthMismatch {
        key: String,
        reference: String,
        expected: usize,
        found: usize,
    },

    #[error("'{key}' is sampled at nuclear positions but the archive has no {}", .missing.join(" or "))]
    MissingAtoms {
        key: String,
        missing: Vec<&'static str>,
    },
}

/// The outcome of validating one archive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    ignored_keys: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Unknown keys skipped under [`super::config::UnknownKeyPolicy::Ignore`].
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn ignore(&mut self, key: impl Into<String>) {
        self.ignored_keys.push(key.into());
    }

    /// All violations on one line.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ValidationError::new(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn into_result_carries_the_violations() {
        let mut report = ValidationReport::default();
        report.push(Violation::UnknownKey { key: "foo".into() });
        report.push(Violation::MissingAtoms {
            key: "nuc_dens".into(),
            missing: vec!["coords", "nums"],
        });
        let err = report.into_result().unwrap_err();
        assert_eq!(err.report().violations().len(), 2);
        assert_eq!(
            err.to_string(),
            "archive failed validation with 2 violation(s): unknown key 'foo'; \
             'nuc_dens' is sampled at nuclear positions but the archive has no coords or nums"
        );
    }
}
