//! Status enums shared across the storefront.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notice.
///
/// Mirrors the three toast styles the storefront shows: a green success
/// toast, a neutral info toast, and a red error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    /// Short lowercase label, e.g. for CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
