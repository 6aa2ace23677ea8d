//! CUSIP → ISIN conversion.
//!
//! CUSIPs identify North-American securities; the derived ISIN is the `US` or
//! `CA` jurisdiction code followed by the full 9-character CUSIP.

use secid_checksum::{is_cusip_valid, isin_check_digit};
use secid_core::{Error, Format, Result};

fn cusip_isin(cusip: &str, jurisdiction: &str) -> Result<String> {
    if !is_cusip_valid(cusip) {
        return Err(Error::InvalidIdentifier {
            format: Format::Cusip,
            identifier: cusip.to_string(),
        });
    }

    let prefix = format!("{jurisdiction}{}", cusip.to_ascii_uppercase());
    let cd = isin_check_digit(&prefix)?;
    Ok(format!("{prefix}{cd}"))
}

/// Convert a CUSIP into its US ISIN form.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `cusip` fails CUSIP validation.
///
/// # Example
/// ```
/// use secid_convert::cusip_to_us_isin;
/// assert_eq!(cusip_to_us_isin("037833100").unwrap(), "US0378331005");
/// ```
pub fn cusip_to_us_isin(cusip: &str) -> Result<String> {
    cusip_isin(cusip, "US")
}

/// Convert a CUSIP into its CA ISIN form.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `cusip` fails CUSIP validation.
pub fn cusip_to_ca_isin(cusip: &str) -> Result<String> {
    cusip_isin(cusip, "CA")
}

/// Convert a CUSIP into a US or CA ISIN depending on `is_us`.
///
/// # Errors
/// [`Error::InvalidIdentifier`] if `cusip` fails CUSIP validation.
pub fn cusip_to_isin(cusip: &str, is_us: bool) -> Result<String> {
    if is_us {
        cusip_to_us_isin(cusip)
    } else {
        cusip_to_ca_isin(cusip)
    }
}
