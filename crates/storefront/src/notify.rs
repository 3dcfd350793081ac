//! User-facing notices ("toasts").
//!
//! State containers report the outcome of user actions through a
//! [`Notifier`]. The presentation layer decides how to show them; the
//! library ships a tracing-backed notifier and a recording one.

use std::sync::{Arc, Mutex};

use chapter_two_core::NoticeLevel;

/// A short message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub description: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            description: None,
        }
    }

    /// Attach a secondary line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sink for [`Notice`]s.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Shared notifier handle held by every container.
pub type SharedNotifier = Arc<dyn Notifier>;

/// Writes notices to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let description = notice.description.as_deref().unwrap_or_default();
        match notice.level {
            NoticeLevel::Error => {
                tracing::warn!(message = %notice.message, description, "notice");
            }
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(
                    level = %notice.level,
                    message = %notice.message,
                    description,
                    "notice"
                );
            }
        }
    }
}

/// Keeps every notice in memory until drained.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut notices| std::mem::take(&mut *notices))
            .unwrap_or_default()
    }

    /// Message of the most recent notice.
    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        self.notices
            .lock()
            .ok()
            .and_then(|notices| notices.last().map(|n| n.message.clone()))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::success("Cart cleared"));
        notifier.notify(Notice::info("Logged out.").with_description("bye"));

        assert_eq!(notifier.last_message().as_deref(), Some("Logged out."));

        let notices = notifier.take();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[1].description.as_deref(), Some("bye"));
        assert!(notifier.take().is_empty());
    }
}
