//! # secid-core
//!
//! Foundational types for secid-rs: the [`Format`] tag describing each of the
//! four supported security-identifier formats (ISIN, CUSIP, SEDOL, FIGI), the
//! per-format character-value mapping, and the error hierarchy shared across
//! the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the shared `Result` alias.
pub mod errors;

/// Identifier format tags and character-value mapping.
pub mod format;

pub use errors::{Error, Result};
pub use format::Format;
