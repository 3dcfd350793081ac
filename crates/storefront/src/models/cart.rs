//! Cart line items.

use serde::{Deserialize, Serialize};

use chapter_two_core::{Price, PriceError, ProductId};

use super::catalog::Product;

/// A line in the shopping cart.
///
/// Lines are unique by [`LineKey`]: the same product in another colour or
/// size is a separate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Display price per unit, e.g. `"₹6,999"`.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Identity of this line.
    #[must_use]
    pub fn line_key(&self) -> LineKey {
        LineKey {
            id: self.id,
            color: self.selected_color.clone(),
            size: self.selected_size.clone(),
        }
    }

    /// Whether this line has the given identity.
    #[must_use]
    pub fn is_line(&self, key: &LineKey) -> bool {
        self.id == key.id && self.selected_color == key.color && self.selected_size == key.size
    }

    /// Parsed unit price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the stored price string is not a number.
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }
}

/// A product as it is added to the cart, before a quantity is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartProduct {
    /// Build a cart entry for a catalog product with the chosen options.
    #[must_use]
    pub fn from_product(
        product: &Product,
        selected_color: Option<String>,
        selected_size: Option<String>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            original_price: product.original_price.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            selected_color,
            selected_size,
        }
    }

    /// Identity of the line this product would land in.
    #[must_use]
    pub fn line_key(&self) -> LineKey {
        LineKey {
            id: self.id,
            color: self.selected_color.clone(),
            size: self.selected_size.clone(),
        }
    }

    /// Turn into a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            category: self.category,
            selected_color: self.selected_color,
            selected_size: self.selected_size,
            quantity,
        }
    }
}

/// Identity of a cart line: product, colour and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub id: ProductId,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl LineKey {
    /// Key for a product with the given options.
    #[must_use]
    pub const fn new(id: ProductId, color: Option<String>, size: Option<String>) -> Self {
        Self { id, color, size }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn palazzo() -> CartProduct {
        CartProduct {
            id: ProductId::new(6),
            name: "Linen Palazzo".to_string(),
            price: "₹6,999".to_string(),
            original_price: None,
            image: "/palazzo.svg".to_string(),
            category: "Bottoms".to_string(),
            selected_color: Some("#8B7355".to_string()),
            selected_size: Some("M".to_string()),
        }
    }

    #[test]
    fn test_line_key_includes_options() {
        let item = palazzo().with_quantity(1);
        assert!(item.is_line(&palazzo().line_key()));

        let other_size = LineKey::new(
            ProductId::new(6),
            Some("#8B7355".to_string()),
            Some("L".to_string()),
        );
        assert!(!item.is_line(&other_size));
    }

    #[test]
    fn test_stored_shape_is_camel_case() {
        let json = serde_json::to_value(palazzo().with_quantity(2)).unwrap();
        assert_eq!(json["selectedColor"], "#8B7355");
        assert_eq!(json["selectedSize"], "M");
        assert_eq!(json["quantity"], 2);
        assert!(json.get("originalPrice").is_none());
    }

    #[test]
    fn test_unit_price() {
        let item = palazzo().with_quantity(1);
        assert_eq!(item.unit_price().unwrap().amount, Decimal::from(6_999));
    }
}
