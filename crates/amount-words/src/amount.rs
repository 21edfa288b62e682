//! Two-decimal, non-negative money amounts

use crate::{AmountError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount with two fractional digits (major.minor)
///
/// The value is rounded half away from zero to two places when the amount
/// is built, so `123.455` becomes `123.46` and `0.995` becomes `1.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Build an amount from a decimal value
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value.to_string()));
        }

        let rounded = value
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        if rounded.trunc().to_u64().is_none() {
            return Err(AmountError::TooLarge(value.to_string()));
        }

        Ok(Self(rounded))
    }

    /// The rounded decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whole units (rupees)
    pub fn major(&self) -> u64 {
        // Checked in `new`
        self.0.trunc().to_u64().unwrap_or_default()
    }

    /// Hundredths (paisa), always 0-99
    pub fn minor(&self) -> u8 {
        ((self.0 - self.0.trunc()) * Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or_default()
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse a decimal such as `"123.45"`, `"7"` or `"1e3"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| AmountError::Invalid(s.to_string()))?;

        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    /// Fixed two decimals, e.g. `100.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_split_major_minor() {
        let a = amount("123.45");
        assert_eq!(a.major(), 123);
        assert_eq!(a.minor(), 45);

        let a = amount("0.5");
        assert_eq!(a.major(), 0);
        assert_eq!(a.minor(), 50);

        let a = amount("7");
        assert_eq!(a.major(), 7);
        assert_eq!(a.minor(), 0);

        let a = amount(".5");
        assert_eq!(a.major(), 0);
        assert_eq!(a.minor(), 50);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(amount("123.455").minor(), 46);
        assert_eq!(amount("0.125").minor(), 13);
        assert_eq!(amount("0.124").minor(), 12);
        assert_eq!(amount("2.675").minor(), 68);
    }

    #[test]
    fn test_rounding_carries_into_major() {
        let a = amount("0.999");
        assert_eq!(a.major(), 1);
        assert_eq!(a.minor(), 0);

        let a = amount("9.995");
        assert_eq!(a.major(), 10);
        assert_eq!(a.minor(), 0);
    }

    #[test]
    fn test_display_has_two_decimals() {
        assert_eq!(amount("100").to_string(), "100.00");
        assert_eq!(amount("123.4").to_string(), "123.40");
        assert_eq!(amount("0.5").to_string(), "0.50");
        assert_eq!(amount("123.455").to_string(), "123.46");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(amount("  42.10 \n").minor(), 10);
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(amount("1e3").major(), 1000);
        assert_eq!(amount("2.5E2").major(), 250);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "abc".parse::<Amount>(),
            Err(AmountError::Invalid("abc".to_string()))
        );
        assert!("".parse::<Amount>().is_err());
        assert!("12.3.4".parse::<Amount>().is_err());
        assert!("NaN".parse::<Amount>().is_err());
        assert!("inf".parse::<Amount>().is_err());
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(
            "-1.50".parse::<Amount>(),
            Err(AmountError::Negative(_))
        ));
        assert!(matches!(
            Amount::new(Decimal::new(-1, 2)),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let a = amount("-0.00");
        assert_eq!(a.major(), 0);
        assert_eq!(a.minor(), 0);
        assert_eq!(a.to_string(), "0.00");
    }

    #[test]
    fn test_too_large_is_rejected() {
        assert!(matches!(
            "99999999999999999999".parse::<Amount>(),
            Err(AmountError::TooLarge(_))
        ));
        assert_eq!(amount("18446744073709551615").major(), u64::MAX);
    }

    #[test]
    fn test_try_from_decimal() {
        let a = Amount::try_from(Decimal::new(12345, 2)).unwrap();
        assert_eq!(a, amount("123.45"));
    }
}
