//! Form boundary conversion from free text to charge amounts.
//!
//! Charge fields are typed by hand and parsed on every keystroke. Nothing
//! the user types may block the calculation, so parsing is permissive: the
//! longest numeric prefix wins and anything else is zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest charge magnitude accepted from the form, 10^20.
///
/// Six charges at this size still price without leaving `Decimal` range.
pub const MAX_CHARGE: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 5, false, 0);

/// Parses a charge amount, returning zero for empty or non-numeric text.
///
/// Leading and trailing whitespace is ignored. The longest leading numeric
/// prefix is used (optional sign, digits, optional fraction, optional
/// exponent), so trailing junk such as a currency suffix is dropped. Values
/// whose magnitude exceeds [`MAX_CHARGE`] are out of range and parse as zero.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::parse_charge_or_zero;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_charge_or_zero("1250.50"), Decimal::from_str("1250.50").unwrap());
/// assert_eq!(parse_charge_or_zero("  800 INR"), Decimal::from(800));
/// assert_eq!(parse_charge_or_zero(""), Decimal::ZERO);
/// assert_eq!(parse_charge_or_zero("abc"), Decimal::ZERO);
/// ```
pub fn parse_charge_or_zero(text: &str) -> Decimal {
    let Some(number) = NumericPrefix::scan(text.trim()) else {
        return Decimal::ZERO;
    };

    let canonical = number.canonical();
    let parsed = if number.exponent.is_some() {
        Decimal::from_scientific(&canonical)
    } else {
        Decimal::from_str(&canonical)
    };

    parsed
        .ok()
        .filter(|value| value.abs() <= MAX_CHARGE)
        .unwrap_or(Decimal::ZERO)
}

/// The pieces of a numeric prefix, each borrowed from the input.
struct NumericPrefix<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> NumericPrefix<'a> {
    fn scan(s: &'a str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos = 1;
                true
            }
            Some(b'+') => {
                pos = 1;
                false
            }
            _ => false,
        };

        let int_start = pos;
        pos = skip_digits(bytes, pos);
        let integer = &s[int_start..pos];

        let mut fraction = "";
        if bytes.get(pos) == Some(&b'.') {
            let frac_start = pos + 1;
            let frac_end = skip_digits(bytes, frac_start);
            fraction = &s[frac_start..frac_end];
            pos = frac_end;
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        // An exponent only counts when at least one digit follows it.
        let mut exponent = None;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp_pos = pos + 1;
            if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
                exp_pos += 1;
            }
            let exp_end = skip_digits(bytes, exp_pos);
            if exp_end > exp_pos {
                exponent = Some(&s[pos + 1..exp_end]);
            }
        }

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    fn canonical(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        if self.integer.is_empty() {
            out.push('0');
        } else {
            out.push_str(self.integer);
        }
        if !self.fraction.is_empty() {
            out.push('.');
            out.push_str(self.fraction);
        }
        if let Some(exp) = self.exponent {
            out.push('e');
            out.push_str(exp);
        }
        out
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}
