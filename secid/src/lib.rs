//! # secid
//!
//! Check-digit and conversion utilities for financial security identifiers.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `secid-*` crates.
//!
//! Four identifier formats are supported: ISIN, CUSIP, SEDOL, and FIGI. For
//! each there is a check-digit calculator and a validator; SEDOLs and CUSIPs
//! can additionally be converted into their ISIN form.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! secid = "0.1"
//! ```
//!
//! ```rust
//! use secid::{cusip_to_us_isin, is_isin_valid};
//!
//! assert!(is_isin_valid("US0378331005"));
//! assert_eq!(cusip_to_us_isin("037833100").unwrap(), "US0378331005");
//! ```
//!
//! Every function is a pure computation over its input string: no I/O, no
//! shared state, safe to call from any number of threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Format tags, character-value mapping, and error definitions.
pub use secid_core as core;

/// Check-digit calculators and validators.
pub use secid_checksum as checksum;

/// SEDOL → ISIN and CUSIP → ISIN converters.
pub use secid_convert as convert;

pub use secid_checksum::{
    cusip_check_digit, figi_check_digit, is_cusip_valid, is_figi_valid, is_isin_valid,
    is_sedol_valid, isin_check_digit, sedol_check_digit,
};
pub use secid_convert::{
    cusip_to_ca_isin, cusip_to_isin, cusip_to_us_isin, sedol_to_gb_isin, sedol_to_ie_isin,
    sedol_to_isin,
};
pub use secid_core::{Error, Format, Result};
