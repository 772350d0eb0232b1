//! Error type for every roster operation.
//!
//! All failures are ordinary `Err` returns. An operation that fails leaves
//! every collection exactly as it was before the call.

use std::fmt;

/// Result alias used throughout the roster crates.
pub type RosterResult<T> = Result<T, RosterError>;

/// Discriminant of a [`RosterError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Capacity,
    Conflict,
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Capacity => "capacity",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Out-of-range class code or capacity, under-age student, malformed field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Full class or a school that already holds the maximum number of classes.
    #[error("Capacity error: {0}")]
    Capacity(String),

    /// Duplicate email, modality mismatch, class code mismatch or duplicate class code.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No student or class matches the given identifier.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl RosterError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Capacity(_) => ErrorKind::Capacity,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Capacity(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg) => msg,
        }
    }
}
