//! # secid-checksum
//!
//! Check-digit calculators and validators for the four supported
//! security-identifier formats.
//!
//! Each format uses a Luhn-mod-10 relative: characters are mapped to numeric
//! values, alternating values are doubled (or, for SEDOL, fixed per-position
//! weights are applied), the resulting digits are summed, and the check digit
//! is `(10 − sum % 10) % 10`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Check-digit calculators, one per format.
pub mod check_digit;

/// Validators returning `bool`, never errors.
pub mod validate;

pub use check_digit::{
    cusip_check_digit, figi_check_digit, isin_check_digit, sedol_check_digit,
};
pub use validate::{is_cusip_valid, is_figi_valid, is_isin_valid, is_sedol_valid};
