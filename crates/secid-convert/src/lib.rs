//! # secid-convert
//!
//! Conversion of national security identifiers into their ISIN form.
//!
//! An ISIN derived from a national identifier is the 2-letter jurisdiction
//! code, zero padding where the national code is shorter than 9 characters,
//! the national identifier itself (check digit included), and a freshly
//! computed ISIN check digit. A converter validates its source identifier
//! first and never tries to repair malformed input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// CUSIP → US/CA ISIN conversion.
pub mod cusip;

/// SEDOL → GB/IE ISIN conversion.
pub mod sedol;

pub use cusip::{cusip_to_ca_isin, cusip_to_isin, cusip_to_us_isin};
pub use sedol::{sedol_to_gb_isin, sedol_to_ie_isin, sedol_to_isin};
