//! SEDOL → ISIN conversion.
//!
//! SEDOLs identify UK- and Ireland-listed securities, so the derived ISIN
//! carries a `GB` or `IE` jurisdiction code followed by `00` padding and the
//! full 7-character SEDOL.

use secid_checksum::{is_sedol_valid, isin_check_digit};
use secid_core::{Error, Format, Result};

fn sedol_isin(sedol: &str, jurisdiction: &str) -> Result<String> {
    if !is_sedol_valid(sedol) {
        return Err(Error::InvalidIdentifier {
            format: Format::Sedol,
            identifier: sedol.to_string(),
        });
    }

    let prefix = format!("{jurisdiction}00{}", sedol.to_ascii_uppercase());
    let cd = isin_check_digit(&prefix)?;
    Ok(format!("{prefix}{cd}"))
}

/// Convert a SEDOL into its GB ISIN form.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `sedol` fails SEDOL validation.
///
/// # Example
/// ```
/// use secid_convert::sedol_to_gb_isin;
/// assert_eq!(sedol_to_gb_isin("2046251").unwrap(), "GB0020462510");
/// ```
pub fn sedol_to_gb_isin(sedol: &str) -> Result<String> {
    sedol_isin(sedol, "GB")
}

/// Convert a SEDOL into its IE ISIN form.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `sedol` fails SEDOL validation.
pub fn sedol_to_ie_isin(sedol: &str) -> Result<String> {
    sedol_isin(sedol, "IE")
}

/// Convert a SEDOL into a GB or IE ISIN depending on `is_gb`.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `sedol` fails SEDOL validation.
pub fn sedol_to_isin(sedol: &str, is_gb: bool) -> Result<String> {
    if is_gb {
        sedol_to_gb_isin(sedol)
    } else {
        sedol_to_ie_isin(sedol)
    }
}
