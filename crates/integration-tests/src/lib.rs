//! Integration tests for the Chapter 2 storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p chapter-two-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - State survives a reload from the file store
//! - `shopping` - Cart, wishlist and looks working together
//! - `account` - Auth, preferences and reviews
//!
//! Tests share [`TestContext`], which owns a temporary data directory and
//! opens fresh [`AppState`]s over it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use chapter_two_storefront::{
    AppState, LatencyConfig, RecordingNotifier, Result, SharedNotifier, StorefrontConfig,
};

/// A temporary data directory plus the notifier of the last opened state.
pub struct TestContext {
    dir: TempDir,
    notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            notifier: Arc::new(RecordingNotifier::new()),
        })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration pointing at the data directory with no simulated latency.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig::new(self.dir.path()).with_latency(LatencyConfig::none())
    }

    /// Open (or reopen) application state over the data directory.
    ///
    /// # Errors
    ///
    /// Propagates `AppState::open_with_notifier` failures.
    pub fn open(&mut self) -> Result<AppState> {
        self.notifier = Arc::new(RecordingNotifier::new());
        let shared: SharedNotifier = Arc::clone(&self.notifier) as SharedNotifier;
        AppState::open_with_notifier(self.config(), shared)
    }

    /// Notifier attached to the most recently opened state.
    #[must_use]
    pub const fn notifier(&self) -> &Arc<RecordingNotifier> {
        &self.notifier
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn file_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }
}
