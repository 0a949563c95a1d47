//! Margin rate model.
//!
//! Every quote is computed at four fixed margin rates side by side. The rates
//! form a closed, ordered set so per-rate output can be stored in a fixed
//! array rather than a string-keyed map.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the four margin rates a quote is computed at.
///
/// Variants are declared in ascending order, so the derived `Ord` matches
/// the numeric order of the percentages.
///
/// # Example
///
/// ```
/// use quote_engine::models::MarginRate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(MarginRate::TwentyFive.label(), "25%");
/// assert_eq!(MarginRate::TwentyFive.fraction(), Decimal::new(25, 2));
/// assert!(MarginRate::Ten < MarginRate::Thirty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarginRate {
    /// 10% margin.
    #[serde(rename = "10%")]
    Ten,
    /// 20% margin.
    #[serde(rename = "20%")]
    Twenty,
    /// 25% margin.
    #[serde(rename = "25%")]
    TwentyFive,
    /// 30% margin.
    #[serde(rename = "30%")]
    Thirty,
}

impl MarginRate {
    /// All margin rates in ascending order.
    pub const ALL: [MarginRate; 4] = [
        MarginRate::Ten,
        MarginRate::Twenty,
        MarginRate::TwentyFive,
        MarginRate::Thirty,
    ];

    /// The rate as a whole-number percentage.
    pub const fn percent(self) -> u32 {
        match self {
            MarginRate::Ten => 10,
            MarginRate::Twenty => 20,
            MarginRate::TwentyFive => 25,
            MarginRate::Thirty => 30,
        }
    }

    /// The rate as a decimal fraction (e.g. `0.25` for 25%).
    pub fn fraction(self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }

    /// Position of this rate in [`MarginRate::ALL`].
    pub const fn index(self) -> usize {
        match self {
            MarginRate::Ten => 0,
            MarginRate::Twenty => 1,
            MarginRate::TwentyFive => 2,
            MarginRate::Thirty => 3,
        }
    }

    /// Display label, e.g. `"10%"`.
    pub const fn label(self) -> &'static str {
        match self {
            MarginRate::Ten => "10%",
            MarginRate::Twenty => "20%",
            MarginRate::TwentyFive => "25%",
            MarginRate::Thirty => "30%",
        }
    }
}

impl fmt::Display for MarginRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        let percents: Vec<u32> = MarginRate::ALL.iter().map(|r| r.percent()).collect();
        assert_eq!(percents, vec![10, 20, 25, 30]);
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, rate) in MarginRate::ALL.iter().enumerate() {
            assert_eq!(rate.index(), i);
        }
    }

    #[test]
    fn test_fraction() {
        assert_eq!(MarginRate::Ten.fraction(), Decimal::new(1, 1));
        assert_eq!(MarginRate::Thirty.fraction(), Decimal::new(3, 1));
    }

    #[test]
    fn test_serializes_as_percentage_label() {
        let json = serde_json::to_string(&MarginRate::TwentyFive).unwrap();
        assert_eq!(json, "\"25%\"");

        let rate: MarginRate = serde_json::from_str("\"20%\"").unwrap();
        assert_eq!(rate, MarginRate::Twenty);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(MarginRate::Ten.to_string(), "10%");
    }
}
