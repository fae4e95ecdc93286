//! Formula rewriter for the mref tool.
//!
//! A formula is a string of single-letter variables, the operators `+ - * /`
//! and parentheses. Rewriting strips whitespace, makes implicit
//! multiplication explicit, and turns every variable into an access into a
//! zero-indexed array (`a` -> `m[0]`, `b` -> `m[1]`, ...).

pub mod engine;
pub mod normalize;
pub mod substitute;
pub mod types;

pub use engine::{Rewriter, rewrite, validate, validate_array_name};
pub use normalize::{normalize, strip_whitespace};
pub use substitute::{array_index, convert_char, substitute};
pub use types::{DEFAULT_ARRAY, DEFAULT_FORMULA, Options, Result, Rewrite, RewriteError};
