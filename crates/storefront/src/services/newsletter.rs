//! Newsletter signup against a simulated backend.

use std::time::Duration;

use thiserror::Error;
use tracing::instrument;

use crate::notify::{Notice, SharedNotifier};

/// Newsletter signup rejections.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Newsletter signup.
pub struct NewsletterService {
    notifier: SharedNotifier,
    delay: Duration,
}

impl NewsletterService {
    #[must_use]
    pub fn new(notifier: SharedNotifier, delay: Duration) -> Self {
        Self { notifier, delay }
    }

    /// Subscribe `email`.
    ///
    /// # Errors
    ///
    /// Returns `NewsletterError` if the address is blank or malformed. The
    /// error is also raised as a notice.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        let email = email.trim();
        if let Err(err) = validate_email(email) {
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        }

        tokio::time::sleep(self.delay).await;

        tracing::info!(email, "Newsletter signup");
        self.notifier.notify(
            Notice::success("Thank you for subscribing!")
                .with_description("You'll receive updates and exclusive offers from Chapter 2."),
        );
        Ok(())
    }
}

/// Loose structural check: a local part, an `@`, and a dotted domain.
fn validate_email(email: &str) -> Result<(), NewsletterError> {
    if email.is_empty() {
        return Err(NewsletterError::MissingEmail);
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(NewsletterError::InvalidEmail)?;

    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());

    if local.is_empty() || domain.contains('@') || !domain_ok {
        return Err(NewsletterError::InvalidEmail);
    }
    Ok(())
}
