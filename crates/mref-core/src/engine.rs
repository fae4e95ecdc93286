//! Rewrite driver: validation, normalization, substitution.

use tracing::debug;

use crate::normalize::normalize;
use crate::substitute::{is_passthrough, substitute};
use crate::types::{DEFAULT_ARRAY, Options, Result, Rewrite, RewriteError};

/// Rewrite a formula with the default array name, without validation.
///
/// ```
/// assert_eq!(mref_core::rewrite("a b - c"), "m[0]*m[1]-m[2]");
/// ```
pub fn rewrite(text: &str) -> String {
    substitute(&normalize(text), DEFAULT_ARRAY)
}

/// Check that a formula only uses lowercase letters, pass-through
/// characters, and whitespace, and that it is not blank.
///
/// Positions count characters of the source, whitespace included.
pub fn validate(text: &str) -> Result<()> {
    let mut seen = false;
    for (position, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_ascii_lowercase() && !is_passthrough(ch) {
            return Err(RewriteError::InvalidCharacter { ch, position });
        }
        seen = true;
    }
    if !seen {
        return Err(RewriteError::Empty);
    }
    Ok(())
}

/// Check that `name` is usable as an array identifier: an ASCII letter or
/// `_`, followed by ASCII alphanumerics or `_`.
pub fn validate_array_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(RewriteError::InvalidArrayName(name.to_string()))
    }
}

/// Rewrites formulas according to a fixed set of [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: Options,
}

impl Rewriter {
    /// Build a rewriter, rejecting array names that are not identifiers.
    pub fn new(options: Options) -> Result<Self> {
        validate_array_name(&options.array)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Normalize a formula, validating it first in strict mode.
    pub fn normalize(&self, text: &str) -> Result<String> {
        if self.options.strict {
            validate(text)?;
        }
        Ok(normalize(text))
    }

    /// Run the full rewrite and return every stage.
    pub fn rewrite(&self, text: &str) -> Result<Rewrite> {
        let normalized = self.normalize(text)?;
        debug!(%normalized, "normalized formula");
        let output = substitute(&normalized, &self.options.array);
        debug!(array = %self.options.array, len = output.len(), "substituted variables");
        Ok(Rewrite {
            source: text.to_string(),
            normalized,
            output,
        })
    }
}
