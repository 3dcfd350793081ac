//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog and cart records carry prices as display strings (`"₹15,999"`).
//! [`Price::parse`] turns such a string into a decimal amount for totals,
//! and `Display` renders an amount back in the same shape.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input contains no digits.
    #[error("price cannot be empty")]
    Empty,
    /// The remaining digits do not form a decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
    /// An arithmetic result does not fit in a decimal.
    #[error("price amount overflowed")]
    Overflow,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a display price such as `"₹15,999"` or `"$19.99"`.
    ///
    /// The currency is taken from the leading symbol (rupees when there is
    /// none). Grouping separators, whitespace and any other decoration are
    /// ignored; only digits, `.` and `-` contribute to the amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Empty` if the input has no digits, or
    /// `PriceError::InvalidAmount` if the digits are not a valid decimal.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let currency_code = CurrencyCode::detect(s);

        let digits: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        if !digits.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceError::Empty);
        }

        let amount =
            Decimal::from_str(&digits).map_err(|_| PriceError::InvalidAmount(s.to_owned()))?;

        Ok(Self::new(amount, currency_code))
    }

    /// Multiply the amount by a quantity, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Overflow` if the product does not fit in a decimal.
    pub fn times(self, quantity: u32) -> Result<Self, PriceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(PriceError::Overflow)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = self.amount.abs().round_dp(2);
        let whole = group_thousands(&abs.trunc().to_string());

        let fraction = abs.fract();
        if fraction.is_zero() {
            write!(f, "{sign}{}{whole}", self.currency_code.symbol())
        } else {
            // `fract()` keeps the leading "0", e.g. "0.50".
            let cents = fraction.to_string();
            let cents = format!("{cents:0<4}");
            write!(
                f,
                "{sign}{}{whole}{}",
                self.currency_code.symbol(),
                cents.get(1..4).unwrap_or(".00")
            )
        }
    }
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Infer the currency from a symbol anywhere in a display string.
    fn detect(s: &str) -> Self {
        if s.contains('$') {
            Self::USD
        } else if s.contains('€') {
            Self::EUR
        } else if s.contains('£') {
            Self::GBP
        } else {
            Self::INR
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rupee_price() {
        let price = Price::parse("₹15,999").unwrap();
        assert_eq!(price.amount, Decimal::from(15_999));
        assert_eq!(price.currency_code, CurrencyCode::INR);
    }

    #[test]
    fn test_parse_other_currencies() {
        let price = Price::parse("$19.99").unwrap();
        assert_eq!(price.amount, Decimal::new(1999, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);

        assert_eq!(Price::parse("£5").unwrap().currency_code, CurrencyCode::GBP);
    }

    #[test]
    fn test_parse_ignores_mangled_symbol() {
        // Double-encoded rupee sign as seen in some stored payloads
        let price = Price::parse("â‚¹19,999").unwrap();
        assert_eq!(price.amount, Decimal::from(19_999));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("₹"), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Price::parse("1.2.3"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_times() {
        let price = Price::parse("₹2,499").unwrap().times(3).unwrap();
        assert_eq!(price.amount, Decimal::from(7_497));
    }

    #[test]
    fn test_times_overflow() {
        let price = Price::new(Decimal::MAX, CurrencyCode::INR);
        assert_eq!(price.times(2), Err(PriceError::Overflow));
        assert_eq!(price.times(1).unwrap().amount, Decimal::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::parse("₹45997").unwrap().to_string(), "₹45,997");
        assert_eq!(Price::parse("₹999").unwrap().to_string(), "₹999");
        assert_eq!(
            Price::new(Decimal::from(1_234_567), CurrencyCode::INR).to_string(),
            "₹1,234,567"
        );
        assert_eq!(Price::parse("$12.5").unwrap().to_string(), "$12.50");
        assert_eq!(Price::zero(CurrencyCode::INR).to_string(), "₹0");
    }
}
