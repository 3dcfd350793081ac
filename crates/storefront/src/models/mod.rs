//! Domain models for the storefront.
//!
//! Stored models (`CartItem`, `WishlistItem`, `User`, `UserPreferences`)
//! serialize with camelCase field names so payloads written by earlier
//! builds of the storefront keep loading.

pub mod cart;
pub mod catalog;
pub mod preferences;
pub mod user;
pub mod wishlist;

pub use cart::{CartItem, CartProduct, LineKey};
pub use catalog::{Look, Product, Review};
pub use preferences::UserPreferences;
pub use user::User;
pub use wishlist::WishlistItem;
