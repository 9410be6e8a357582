use super::report::ValidationReport;
use thiserror::Error;

/// An archive broke at least one validation rule.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("archive failed validation with {} violation(s): {}", .report.violations().len(), .report.summary())]
pub struct ValidationError {
    report: ValidationReport,
}

impl ValidationError {
    pub fn new(report: ValidationReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn into_report(self) -> ValidationReport {
        self.report
    }
}
