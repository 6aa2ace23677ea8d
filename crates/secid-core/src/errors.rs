//! Error types for secid-rs.
//!
//! A single `thiserror`-derived enum covers every failure mode of the
//! library: a character outside a format's alphabet, an input of the wrong
//! length, and a source identifier that fails validation before conversion.

use thiserror::Error;

use crate::format::Format;

/// The top-level error type used throughout secid-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character is not permitted in the given format's alphabet.
    ///
    /// `position` is the 0-based index of the offending character in the
    /// (upper-cased) input.
    #[error("invalid character {character:?} at position {position} in {format} input")]
    InvalidCharacter {
        /// The format whose alphabet rejected the character.
        format: Format,
        /// The offending character, as seen after upper-casing.
        character: char,
        /// 0-based position of the character in the input.
        position: usize,
    },

    /// An identifier failed format validation before a conversion was
    /// attempted.
    #[error("{identifier:?} is not a valid {format}")]
    InvalidIdentifier {
        /// The format the identifier was validated against.
        format: Format,
        /// The rejected input, unchanged.
        identifier: String,
    },

    /// An input had the wrong number of characters for the requested
    /// computation.
    #[error("{format} input must be {expected} characters, got {actual}")]
    InvalidLength {
        /// The format whose length requirement was violated.
        format: Format,
        /// The required number of characters.
        expected: usize,
        /// The number of characters actually supplied.
        actual: usize,
    },
}

/// Shorthand `Result` type used throughout secid-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
