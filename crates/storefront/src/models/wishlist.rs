//! Wishlist entries.

use serde::{Deserialize, Serialize};

use chapter_two_core::ProductId;

use super::cart::CartProduct;
use super::catalog::Product;

/// A saved product. Unique by `id`; carries no quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
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

impl WishlistItem {
    /// The cart entry this wishlist item becomes when moved to the cart.
    #[must_use]
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct {
            id: self.id,
            name: self.name.clone(),
            price: self.price.clone(),
            original_price: self.original_price.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            selected_color: self.selected_color.clone(),
            selected_size: self.selected_size.clone(),
        }
    }
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            original_price: product.original_price.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            selected_color: None,
            selected_size: None,
        }
    }
}
