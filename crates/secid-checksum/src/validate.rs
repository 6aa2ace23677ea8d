//! Identifier validators.
//!
//! A validator recomputes the check digit from the data characters and
//! compares it to the identifier's last character; structural shape alone is
//! never enough. Every failure path (wrong length, bad character, mismatched
//! digit) degrades to `false` — validators never return errors.

use secid_core::{Format, Result};

use crate::check_digit::{
    cusip_check_digit, figi_check_digit, isin_check_digit, sedol_check_digit,
};

/// Recompute the check digit over the identifier's data characters and
/// compare it to the digit value of the final character.
fn check_digit_matches(format: Format, id: &str, check: fn(&str) -> Result<u8>) -> bool {
    if id.chars().count() != format.len() {
        return false;
    }

    let stored = match id.chars().last().and_then(|c| c.to_digit(10)) {
        Some(d) => d,
        None => return false,
    };

    // Calculators only read the data characters, so the full identifier can
    // be passed through as-is.
    match check(id) {
        Ok(cd) => u32::from(cd) == stored,
        Err(_) => false,
    }
}

/// Return `true` if `isin` is a well-formed 12-character ISIN with a correct
/// check digit.
///
/// # Example
/// ```
/// use secid_checksum::is_isin_valid;
/// assert!(is_isin_valid("US0378331005"));
/// assert!(!is_isin_valid("US0378331006"));
/// ```
pub fn is_isin_valid(isin: &str) -> bool {
    check_digit_matches(Format::Isin, isin, isin_check_digit)
}

/// Return `true` if `cusip` is a well-formed 9-character CUSIP with a correct
/// check digit.
pub fn is_cusip_valid(cusip: &str) -> bool {
    check_digit_matches(Format::Cusip, cusip, cusip_check_digit)
}

/// Return `true` if `sedol` is a well-formed 7-character SEDOL with a correct
/// check digit.
pub fn is_sedol_valid(sedol: &str) -> bool {
    check_digit_matches(Format::Sedol, sedol, sedol_check_digit)
}

/// Return `true` if `figi` is a well-formed 12-character FIGI with a correct
/// check digit.
pub fn is_figi_valid(figi: &str) -> bool {
    check_digit_matches(Format::Figi, figi, figi_check_digit)
}
