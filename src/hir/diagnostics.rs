//! Diagnostics: resolution errors and their codes.
//!
//! "Nothing matched" is not an error for the `find_*`/`get_types` family;
//! only the strict `get_*` lookups turn it into [`DepError::NotFound`].

use thiserror::Error;

use crate::syntax::SyntaxError;

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes attached to each [`DepError`].
pub mod codes {
    /// Undefined reference (name not found).
    pub const UNDEFINED_REFERENCE: &str = "E0001";
    /// Ambiguous reference (multiple candidates).
    pub const AMBIGUOUS_REFERENCE: &str = "E0002";
    /// The same internal path was registered twice.
    pub const DUPLICATE_FILE: &str = "E0004";
    /// A package no loaded file declares.
    pub const UNKNOWN_PACKAGE: &str = "E0008";
    /// Malformed element tree.
    pub const SYNTAX: &str = "E0010";
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised by the project registry and the resolution core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DepError {
    #[error("more than one type found for '{name}'")]
    Ambiguous { name: String },

    #[error("type '{name}' not found{}", in_context(.context))]
    NotFound {
        name: String,
        /// Full name of the type the lookup was relative to, if any.
        context: Option<String>,
    },

    #[error("file '{path}' is already registered")]
    DuplicateFile { path: String },

    #[error("no file declares package '{package}'")]
    UnknownPackage { package: String },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl DepError {
    pub fn ambiguous(name: impl Into<String>) -> Self {
        DepError::Ambiguous { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        DepError::NotFound {
            name: name.into(),
            context: None,
        }
    }

    pub fn not_found_in(name: impl Into<String>, context: impl Into<String>) -> Self {
        DepError::NotFound {
            name: name.into(),
            context: Some(context.into()),
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DepError::Ambiguous { .. } => codes::AMBIGUOUS_REFERENCE,
            DepError::NotFound { .. } => codes::UNDEFINED_REFERENCE,
            DepError::DuplicateFile { .. } => codes::DUPLICATE_FILE,
            DepError::UnknownPackage { .. } => codes::UNKNOWN_PACKAGE,
            DepError::Syntax(_) => codes::SYNTAX,
        }
    }

    /// The name a failed lookup asked for, if this is a lookup error.
    pub fn requested_name(&self) -> Option<&str> {
        match self {
            DepError::Ambiguous { name } | DepError::NotFound { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

fn in_context(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!(" in {c}"))
        .unwrap_or_default()
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DepError>;
