//! Status-region model for user-visible feedback.
//!
//! DESIGN
//! ======
//! Every outcome of a form submission — validation failure, network failure,
//! or a successful greeting — is expressed as one `StatusMessage`. The region
//! shows at most one message at a time; a new message fully replaces the
//! previous one.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Severity of the feedback shown in the status region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Content and styling state of the single feedback region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }

    /// Inline style for the region: background, border, and text color
    /// derived from severity.
    pub fn style(&self) -> &'static str {
        match self.severity {
            Severity::Success => {
                "background-color: #e9f7ef; border-color: #28a745; color: #155724;"
            }
            Severity::Error => {
                "background-color: #f8d7da; border-color: #dc3545; color: #721c24;"
            }
        }
    }
}
