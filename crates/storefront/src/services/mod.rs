//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - Cart line items, totals and sidebar visibility
//! - `wishlist` - Saved products and sidebar visibility
//! - `auth` - Mock login, signup and logout
//! - `preferences` - Preferred category for featured listings
//! - `reviews` - Review submission (simulated backend)
//! - `newsletter` - Newsletter signup (simulated backend)
//! - `contact` - Contact form (simulated backend)

pub mod auth;
pub mod cart;
pub mod contact;
pub mod newsletter;
pub mod preferences;
pub mod reviews;
pub mod wishlist;

pub use auth::{Auth, AuthError};
pub use cart::{Cart, CartAction, CartState};
pub use contact::{ContactError, ContactMessage, ContactService};
pub use newsletter::{NewsletterError, NewsletterService};
pub use preferences::Preferences;
pub use reviews::{ReviewError, ReviewService};
pub use wishlist::{Wishlist, WishlistAction, WishlistState};
