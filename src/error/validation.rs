//! Required-field failures raised by the wizard.

use thiserror::Error;

/// Which check produced the failure; decides the banner wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// Current page only, on advance.
    Page,
    /// Whole form, on final submit.
    Form,
}

impl ValidationScope {
    /// Banner wording placed before the field label.
    pub fn prefix(&self) -> &'static str {
        match self {
            ValidationScope::Page => "Requirement Not Met",
            ValidationScope::Form => "Incomplete Transmission",
        }
    }
}

/// The first required field found unmet. Only one field is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {label}", .scope.prefix())]
pub struct ValidationFailure {
    pub scope: ValidationScope,
    pub label: String,
}

impl ValidationFailure {
    pub fn page(label: impl Into<String>) -> Self {
        Self {
            scope: ValidationScope::Page,
            label: label.into(),
        }
    }

    pub fn form(label: impl Into<String>) -> Self {
        Self {
            scope: ValidationScope::Form,
            label: label.into(),
        }
    }
}
