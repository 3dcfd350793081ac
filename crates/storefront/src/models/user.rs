//! User domain types.

use serde::{Deserialize, Serialize};

use chapter_two_core::UserId;

/// The signed-in shopper.
///
/// Created by a (mock) login or signup and persisted until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (`user-123` for the demo login, `user-<uuid>` for signups).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address as entered; not validated.
    pub email: String,
}
