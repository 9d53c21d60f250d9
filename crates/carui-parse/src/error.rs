#![forbid(unsafe_code)]

//! Parse error taxonomy.
//!
//! Only two conditions are fatal: a required field that is absent, and a
//! required field that is present with the wrong JSON type. Everything else
//! in the input recovers locally (documented defaults, silent skips, token
//! fallbacks). A fatal error aborts the whole parse; no partial template is
//! ever returned.

use thiserror::Error;

/// Result alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A fatal failure while translating a render tree.
///
/// The `path` is the dotted field path from the root node, with sequence
/// indices in brackets (for example `children[2].metadata.latitude`), so the
/// owner can locate the offending node without re-walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required field is absent.
    #[error("missing required field: {path}")]
    MissingField { path: String },

    /// A required field is present but has the wrong JSON type.
    #[error("field {path}: expected {expected}")]
    InvalidType {
        path: String,
        expected: &'static str,
    },
}

impl ParseError {
    /// A missing required field at the given path.
    #[must_use]
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// A wrong-typed required field at the given path.
    #[must_use]
    pub fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            path: path.into(),
            expected,
        }
    }

    /// The offending field path, relative to the root node.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path } | Self::InvalidType { path, .. } => path,
        }
    }
}
