//! Error types for Retroblog operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Retroblog crates. Uses `thiserror` for derive macros.
//!
//! Two kinds of failure live here. Construction-time failures
//! ([`Error::DuplicateIdentifier`], [`Error::InvalidRecord`],
//! [`Error::Content`]) mean the catalog is inconsistent and the process must
//! not start. [`Error::NotFound`] is an expected query outcome that the page
//! layer renders as a "not found" view.

use std::fmt;

use thiserror::Error;

/// Which identifier namespace a duplicate was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// The stable record `id`.
    Id,
    /// The URL-facing `slug`.
    Slug,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("id"),
            Self::Slug => f.write_str("slug"),
        }
    }
}

/// Errors that can occur in Retroblog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No record has the requested slug or id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Two records share an identifier.
    #[error("Duplicate {kind}: {value}")]
    DuplicateIdentifier {
        /// Namespace the collision happened in.
        kind: IdentifierKind,
        /// The repeated value.
        value: String,
    },

    /// A record violates a required-field or format rule.
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord {
        /// Id of the offending record (may be empty if the id itself is missing).
        id: String,
        /// Which rule was violated.
        reason: String,
    },

    /// A compiled-in content source could not be read.
    #[error("Content source '{source_name}': {message}")]
    Content {
        /// Name of the source document.
        source_name: String,
        /// Parser or mapping message.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a duplicate identifier error.
    pub fn duplicate(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self::DuplicateIdentifier {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid record error.
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a content source error.
    pub fn content(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Content {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Whether this is the recoverable "no such record" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error means the catalog cannot be assembled.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentifier { .. } | Self::InvalidRecord { .. } | Self::Content { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using Retroblog's Error type.
pub type Result<T> = std::result::Result<T, Error>;
