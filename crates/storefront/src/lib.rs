//! Chapter 2 storefront library.
//!
//! The storefront's state layer: the embedded catalog, the cart, wishlist,
//! auth and preferences containers persisted to on-device storage, and the
//! simulated review, newsletter and contact services. Presentation layers
//! (the `c2-cli` binary, tests) drive everything through [`state::AppState`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
pub mod state;
pub mod storage;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, LatencyConfig, StorefrontConfig};
pub use error::{AppError, Result};
pub use notify::{Notice, Notifier, RecordingNotifier, SharedNotifier, TracingNotifier};
pub use state::AppState;
