//! Command handlers.
//!
//! Each handler runs one operation against the hydrated [`AppState`] and
//! prints the state it touched.
//!
//! [`AppState`]: chapter_two_storefront::AppState

pub mod account;
pub mod cart;
pub mod catalog;
pub mod forms;
pub mod output;
pub mod wishlist;

use std::str::FromStr;

use thiserror::Error;

use chapter_two_core::ProductId;

/// Errors parsing a `<product-id>=<colour>` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorChoiceError {
    #[error("expected <product-id>=<colour>, got {0:?}")]
    MissingSeparator(String),

    #[error("invalid product id {0:?}")]
    InvalidProductId(String),

    #[error("colour must not be empty")]
    EmptyColor,
}

/// A colour picked for one product of a look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub product_id: ProductId,
    pub color: String,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, color) = s
            .split_once('=')
            .ok_or_else(|| ColorChoiceError::MissingSeparator(s.to_string()))?;
        let product_id = id
            .parse()
            .map_err(|_| ColorChoiceError::InvalidProductId(id.to_string()))?;
        let color = color.trim();
        if color.is_empty() {
            return Err(ColorChoiceError::EmptyColor);
        }
        Ok(Self {
            product_id,
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_choice() {
        let choice: ColorChoice = "10=#A0826E".parse().unwrap();
        assert_eq!(choice.product_id, ProductId::new(10));
        assert_eq!(choice.color, "#A0826E");
    }

    #[test]
    fn test_parse_color_choice_errors() {
        assert_eq!(
            "10".parse::<ColorChoice>(),
            Err(ColorChoiceError::MissingSeparator("10".to_string()))
        );
        assert_eq!(
            "hoodie=#fff".parse::<ColorChoice>(),
            Err(ColorChoiceError::InvalidProductId("hoodie".to_string()))
        );
        assert_eq!("10= ".parse::<ColorChoice>(), Err(ColorChoiceError::EmptyColor));
    }
}
