//! Contact form against a simulated backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::notify::{Notice, SharedNotifier};

/// Contact form rejections.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,
}

/// A message from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Contact form delivery.
pub struct ContactService {
    notifier: SharedNotifier,
    delay: Duration,
}

impl ContactService {
    #[must_use]
    pub fn new(notifier: SharedNotifier, delay: Duration) -> Self {
        Self { notifier, delay }
    }

    /// "Send" `message`: wait out the simulated round-trip and log it.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingFields` if any field is blank.
    #[instrument(skip(self, message), fields(email = %message.email))]
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        if !message.is_complete() {
            let err = ContactError::MissingFields;
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        }

        tokio::time::sleep(self.delay).await;

        tracing::info!(
            name = %message.name,
            subject = %message.subject,
            "Contact form submitted"
        );
        self.notifier.notify(
            Notice::success("Message sent successfully!")
                .with_description("We'll get back to you shortly."),
        );
        Ok(())
    }
}
