//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic store failures (uniqueness, lookups).
/// File and console concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record with the same code is already in the store.
    #[error("an item with code `{0}` already exists")]
    DuplicateCode(String),

    /// No record carries the requested code.
    #[error("no item found with code `{0}`")]
    NotFound(String),
}

impl DomainError {
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }
}

/// Rejection of a single line of user input.
///
/// The `Display` text is what the console shows before prompting again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    InvalidNumber,

    #[error("Please enter a valid decimal number.")]
    InvalidDecimal,

    #[error("{0} cannot be negative.")]
    Negative(&'static str),

    #[error("{0} cannot be empty.")]
    Empty(&'static str),
}
