//! Domain error taxonomy
//!
//! Every use case reports precondition violations through [`DomainError`].
//! The presentation layer decides how each variant surfaces over HTTP.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A precondition on the caller's input was violated
    #[error("{0}")]
    InvalidInput(String),

    /// A live integration placeholder was invoked
    #[error("{0}")]
    NotImplemented(String),
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DomainError::InvalidInput(message.into())
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        DomainError::NotImplemented(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
