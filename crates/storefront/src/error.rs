//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for every fallible storefront
//! operation. Callers show `user_message()` to the shopper and call
//! `report()` to capture internal failures to Sentry.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::contact::ContactError;
use crate::services::newsletter::NewsletterError;
use crate::services::reviews::ReviewError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// On-device storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog lookup or parsing failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Review submission rejected.
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    /// Newsletter signup rejected.
    #[error("Newsletter error: {0}")]
    Newsletter(#[from] NewsletterError),

    /// Contact form rejected.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Text safe to show the shopper.
    ///
    /// Validation failures carry their own message; storage and catalog
    /// internals are hidden.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "Something went wrong saving your changes.".to_string(),
            Self::Catalog(CatalogError::Parse(_)) => "The catalog is unavailable.".to_string(),
            Self::Catalog(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Review(err) => err.to_string(),
            Self::Newsletter(err) => err.to_string(),
            Self::Contact(err) => err.to_string(),
            Self::Config(_) => "The storefront is misconfigured.".to_string(),
        }
    }

    /// Whether this error is an internal failure rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Catalog(CatalogError::Parse(_)) | Self::Config(_)
        )
    }

    /// Capture internal failures to Sentry and log them.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        } else {
            tracing::debug!(error = %self, "Rejected input");
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "12")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
