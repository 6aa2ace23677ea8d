//! Check-digit calculators.
//!
//! Every calculator is case-insensitive, reads the format's data characters
//! (the identifier minus its trailing check digit), and returns a digit in
//! `0..=9`. Anything after the data characters is ignored, so a calculator
//! may be handed either the bare data characters or a full identifier.
//!
//! ISIN and FIGI expand mapped (and doubled) values into their decimal digits
//! and sum the digits; CUSIP uses the arithmetically equivalent
//! `v / 10 + v % 10` shortcut per value; SEDOL replaces doubling with fixed
//! per-position weights.

use secid_core::{Error, Format, Result};

/// Per-position weights for the SEDOL weighted sum.
const SEDOL_WEIGHTS: [u32; 6] = [1, 3, 1, 7, 3, 9];

/// Upper-case the first `format.body_len()` characters of `input` and map
/// them to numeric values under `format`'s alphabet.
///
/// Requires at least `format.body_len()` characters; any surplus (such as the
/// identifier's own check digit) is ignored.
fn mapped_values(format: Format, input: &str) -> Result<Vec<u8>> {
    let expected = format.body_len();
    let actual = input.chars().count();
    if actual < expected {
        return Err(Error::InvalidLength {
            format,
            expected,
            actual,
        });
    }

    input
        .chars()
        .take(expected)
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .map(|(position, character)| {
            format.char_value(character).ok_or(Error::InvalidCharacter {
                format,
                character,
                position,
            })
        })
        .collect()
}

/// Expand mapped values into individual decimal digits: a value below 10
/// contributes one digit, a two-digit letter value contributes both.
fn expand_digits(values: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(values.len() * 2);
    for &v in values {
        if v >= 10 {
            digits.push(v / 10);
        }
        digits.push(v % 10);
    }
    digits
}

/// Sum of the decimal digits of `v` (values here never exceed two digits).
fn digit_sum(v: u32) -> u32 {
    v / 10 + v % 10
}

/// Calculate the check digit for an ISIN from its first 11 characters.
///
/// The characters are substituted by their numeric values and concatenated
/// into one decimal digit string; the string is split by 0-based index
/// parity, the even-index group is doubled when the string length is odd and
/// the odd-index group otherwise, and all digits of both (re-rendered) groups
/// are summed.
///
/// # Errors
/// [`Error::InvalidCharacter`] for anything outside `A-Z`/`0-9`, and
/// [`Error::InvalidLength`] if fewer than 11 characters are supplied.
///
/// # Example
/// ```
/// use secid_checksum::isin_check_digit;
/// assert_eq!(isin_check_digit("US037833100"), Ok(5)); // Apple Inc.
/// ```
pub fn isin_check_digit(isin: &str) -> Result<u8> {
    let digits = expand_digits(&mapped_values(Format::Isin, isin)?);

    // Which parity gets doubled depends on the expanded length, not on the
    // original character positions.
    let double_even = digits.len() % 2 == 1;

    let mut sum = 0u32;
    for (i, &d) in digits.iter().enumerate() {
        if (i % 2 == 0) == double_even {
            sum += digit_sum(u32::from(d) * 2);
        } else {
            sum += u32::from(d);
        }
    }

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Calculate the check digit for a CUSIP from its first 8 characters.
///
/// Values at odd 0-based positions are doubled; each (possibly doubled)
/// value contributes `v / 10 + v % 10` to the sum.
///
/// # Errors
/// [`Error::InvalidCharacter`] for anything outside `A-Z`/`0-9`/`*`/`@`/`#`,
/// and [`Error::InvalidLength`] if fewer than 8 characters are supplied.
pub fn cusip_check_digit(cusip: &str) -> Result<u8> {
    let values = mapped_values(Format::Cusip, cusip)?;

    let mut sum = 0u32;
    for (i, &v) in values.iter().enumerate() {
        let mut v = u32::from(v);
        if i % 2 == 1 {
            v *= 2;
        }
        sum += digit_sum(v);
    }

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Calculate the check digit for a SEDOL from its first 6 characters.
///
/// A weighted sum with weights `1, 3, 1, 7, 3, 9` over the character values.
/// Vowels are rejected; SEDOL codes never contain them.
///
/// # Errors
/// [`Error::InvalidCharacter`] for vowels and anything outside the SEDOL
/// alphabet, and [`Error::InvalidLength`] if fewer than 6 characters are
/// supplied.
pub fn sedol_check_digit(sedol: &str) -> Result<u8> {
    let values = mapped_values(Format::Sedol, sedol)?;

    let sum: u32 = values
        .iter()
        .zip(SEDOL_WEIGHTS)
        .map(|(&v, w)| u32::from(v) * w)
        .sum();

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Calculate the check digit for a FIGI from its first 11 characters.
///
/// Values at odd 0-based positions are doubled; every (possibly doubled)
/// value is rendered as its decimal digits and all digits of the
/// concatenation are summed.
///
/// # Errors
/// [`Error::InvalidCharacter`] for anything outside `A-Z`/`0-9`, and
/// [`Error::InvalidLength`] if fewer than 11 characters are supplied.
pub fn figi_check_digit(figi: &str) -> Result<u8> {
    let values = mapped_values(Format::Figi, figi)?;

    let mut rendered = Vec::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        let mut v = u32::from(v);
        if i % 2 == 1 {
            v *= 2;
        }
        rendered.push(v as u8);
    }

    let sum: u32 = expand_digits(&rendered).iter().map(|&d| u32::from(d)).sum();

    Ok(((10 - sum % 10) % 10) as u8)
}
