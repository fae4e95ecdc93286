//! Configuration management for the mref formula rewriter.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! `mref.yaml` / `mref.toml` file, then `MREF_*` environment variables.

pub mod config;
pub mod discover;
