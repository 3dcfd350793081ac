//! Chapter 2 Core - Shared types library.
//!
//! This crate provides common types used across all Chapter 2 components:
//! - `storefront` - State containers, catalog and simulated backend services
//! - `cli` - Command-line driver over the storefront state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no async runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, ratings, and notice levels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
