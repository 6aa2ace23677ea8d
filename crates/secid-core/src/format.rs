//! Security-identifier format tags.
//!
//! Each [`Format`] variant carries the fixed identifier length and the
//! character-to-value mapping for its alphabet. The four check-digit
//! algorithms are close Luhn-mod-10 relatives but differ in exactly these
//! two respects, so they live here as data rather than as a type hierarchy.

/// The four supported security-identifier formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// International Securities Identification Number: 2-letter country code,
    /// 9-character national code, 1 check digit.
    Isin,
    /// 9-character North-American identifier: 8 data characters plus a check
    /// digit. Its alphabet adds the special symbols `*`, `@`, and `#`.
    Cusip,
    /// 7-character UK/Ireland identifier: 6 data characters (never vowels)
    /// plus a check digit.
    Sedol,
    /// Financial Instrument Global Identifier: 12 alphanumeric characters,
    /// the last being a check digit.
    Figi,
}

impl Format {
    /// Full identifier length, check digit included.
    pub const fn len(self) -> usize {
        match self {
            Format::Isin | Format::Figi => 12,
            Format::Cusip => 9,
            Format::Sedol => 7,
        }
    }

    /// Number of data characters the check digit is computed over.
    pub const fn body_len(self) -> usize {
        self.len() - 1
    }

    /// Map a single upper-cased character to its numeric value under this
    /// format's alphabet.
    ///
    /// Digits map to their value and letters to `10..=35` (ASCII − 55) in
    /// every format. CUSIP additionally accepts `*` → 36, `@` → 37, `#` → 38.
    /// SEDOL rejects the vowels `A E I O U`; SEDOL codes never contain them.
    ///
    /// Returns `None` for any character outside the alphabet.
    pub fn char_value(self, c: char) -> Option<u8> {
        match c {
            '0'..='9' => Some(c as u8 - b'0'),
            'A' | 'E' | 'I' | 'O' | 'U' if self == Format::Sedol => None,
            'A'..='Z' => Some(c as u8 - 55),
            '*' if self == Format::Cusip => Some(36),
            '@' if self == Format::Cusip => Some(37),
            '#' if self == Format::Cusip => Some(38),
            _ => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Isin => "ISIN",
            Format::Cusip => "CUSIP",
            Format::Sedol => "SEDOL",
            Format::Figi => "FIGI",
        };
        write!(f, "{name}")
    }
}
