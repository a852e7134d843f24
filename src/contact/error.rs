use thiserror::Error;

use super::model::ContactField;

/// Rejections raised before anything leaves the page. The `Display` text is
/// what the form shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in your {0}.")]
    EmptyField(ContactField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Failures reported by a submission capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected submission ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("no response after {0} ms")]
    Timeout(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("submission failed: {0}")]
    SubmissionFailed(#[from] SubmitError),
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

impl ContactError {
    /// True for refusals that leave the form exactly as it was, so there is
    /// nothing new to render.
    pub fn left_form_unchanged(&self) -> bool {
        matches!(self, ContactError::Busy | ContactError::UnknownField(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact field '{0}'")]
pub struct UnknownField(pub String);
