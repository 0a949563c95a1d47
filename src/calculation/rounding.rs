//! Display rounding for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, half away from zero.
///
/// The result always carries a scale of two so it prints as `"1000.00"`
/// rather than `"1000"`. A value that rounds to zero comes back as positive
/// zero.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("236.004").unwrap()).to_string(), "236.00");
/// assert_eq!(round2(Decimal::from_str("0.005").unwrap()).to_string(), "0.01");
/// assert_eq!(round2(Decimal::from(1000)).to_string(), "1000.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("-0.125")), dec("-0.13"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round2(dec("3.93294")), dec("3.93"));
        assert_eq!(round2(dec("1087.7444")), dec("1087.74"));
    }

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(round2(dec("5")).to_string(), "5.00");
        assert_eq!(round2(dec("5.1")).to_string(), "5.10");
        assert_eq!(round2(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_negative_values_that_round_to_zero_are_positive() {
        assert_eq!(round2(dec("-0.001")).to_string(), "0.00");
    }
}
