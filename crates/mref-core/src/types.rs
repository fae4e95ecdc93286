//! Rewriter data model: options, results, and errors.

use serde::Serialize;

/// Name of the array variables are rewritten into when none is configured.
pub const DEFAULT_ARRAY: &str = "m";

/// The formula rewritten when no other input is given.
pub const DEFAULT_FORMULA: &str = "j n r v - i o r v - j m s v + h o s v + i m t v - h n t v";

/// Settings that control a [`crate::Rewriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Array name used in the access expressions (`m` in `m[3]`).
    pub array: String,

    /// Reject characters outside the formula alphabet instead of
    /// rewriting them into meaningless indices.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            array: DEFAULT_ARRAY.to_string(),
            strict: false,
        }
    }
}

/// The stages of a single rewrite, kept for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    /// The formula as given, whitespace included.
    pub source: String,

    /// Whitespace removed, implicit multiplication made explicit.
    pub normalized: String,

    /// Every variable replaced by its array access.
    pub output: String,
}

/// Errors raised by strict rewriting and option validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("formula is empty")]
    Empty,

    #[error("invalid array name: {0:?}")]
    InvalidArrayName(String),
}

/// A specialized `Result` type for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;
