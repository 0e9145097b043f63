//! Failure types shared by the blog tools.
//!
//! Callers only ever see two kinds of failure: a request they can fix and
//! resubmit, or an internal fault. Editorial findings (a short title, a
//! missing section) are deliberately not errors; the validator reports them
//! as data so a structurally weak post still round-trips through the tools.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    /// A required argument was missing, empty, or of the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// Any other failure. The message propagates verbatim to the caller.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl BlogError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Label used for the `error_type` metric dimension.
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Unexpected(_) => "unexpected",
        }
    }
}
