//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only caller-correctable validation failures live here. An unseen driver is
/// never an error: both the ledger and the wallet engine treat it as having
/// zero history.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A monetary amount was negative, fractional, missing, or overflowed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A driver, vehicle, or passenger identifier was missing or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }
}
