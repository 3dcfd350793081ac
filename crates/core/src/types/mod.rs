//! Core types for Chapter 2.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod rating;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use rating::{Rating, RatingError};
pub use status::*;
