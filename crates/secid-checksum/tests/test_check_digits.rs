//! Integration tests exercising calculators and validators together over
//! generated identifier bodies and published reference identifiers.

use proptest::prelude::*;

use secid_checksum::{
    cusip_check_digit, figi_check_digit, is_cusip_valid, is_figi_valid, is_isin_valid,
    is_sedol_valid, isin_check_digit, sedol_check_digit,
};

// ─── Reference identifiers ────────────────────────────────────────────────────

#[test]
fn published_identifiers() {
    // (isin, cusip, sedol) triples for well-known listings
    assert!(is_isin_valid("US0378331005")); // Apple
    assert!(is_cusip_valid("037833100"));
    assert!(is_sedol_valid("2046251"));

    assert!(is_isin_valid("US5949181045")); // Microsoft
    assert!(is_cusip_valid("594918104"));

    assert!(is_isin_valid("GB0002634946")); // BAE Systems
    assert!(is_sedol_valid("0263494"));

    assert!(is_figi_valid("BBG000B9XRY4")); // Apple common stock FIGI
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    // Appending the computed check digit always yields a valid identifier,
    // and every other trailing digit yields an invalid one.
    #[test]
    fn isin_check_digit_is_unique(body in "[A-Z]{2}[A-Z0-9]{9}") {
        let cd = isin_check_digit(&body).unwrap();
        for d in 0u8..=9 {
            let candidate = format!("{body}{d}");
            prop_assert_eq!(is_isin_valid(&candidate), d == cd);
        }
    }

    #[test]
    fn cusip_check_digit_is_unique(body in "[A-Z0-9*@#]{8}") {
        let cd = cusip_check_digit(&body).unwrap();
        for d in 0u8..=9 {
            let candidate = format!("{body}{d}");
            prop_assert_eq!(is_cusip_valid(&candidate), d == cd);
        }
    }

    #[test]
    fn sedol_check_digit_is_unique(body in "[B-DF-HJ-NP-TV-Z0-9]{6}") {
        let cd = sedol_check_digit(&body).unwrap();
        for d in 0u8..=9 {
            let candidate = format!("{body}{d}");
            prop_assert_eq!(is_sedol_valid(&candidate), d == cd);
        }
    }

    #[test]
    fn figi_check_digit_is_unique(body in "[A-Z0-9]{11}") {
        let cd = figi_check_digit(&body).unwrap();
        for d in 0u8..=9 {
            let candidate = format!("{body}{d}");
            prop_assert_eq!(is_figi_valid(&candidate), d == cd);
        }
    }

    // Validation is case-insensitive over the data characters.
    #[test]
    fn isin_validation_ignores_case(body in "[A-Z]{2}[A-Z0-9]{9}") {
        let cd = isin_check_digit(&body).unwrap();
        let upper = format!("{body}{cd}");
        let lower = upper.to_lowercase();
        prop_assert!(is_isin_valid(&upper));
        prop_assert!(is_isin_valid(&lower));
    }

    // Any vowel anywhere makes a SEDOL body unacceptable.
    #[test]
    fn sedol_rejects_vowels(
        body in "[B-DF-HJ-NP-TV-Z0-9]{6}",
        pos in 0usize..6,
        vowel in proptest::sample::select(vec!['A', 'E', 'I', 'O', 'U']),
    ) {
        let mut chars: Vec<char> = body.chars().collect();
        chars[pos] = vowel;
        let tainted: String = chars.into_iter().collect();
        let padded = format!("{tainted}0");
        prop_assert!(sedol_check_digit(&tainted).is_err());
        prop_assert!(!is_sedol_valid(&padded));
    }
}
