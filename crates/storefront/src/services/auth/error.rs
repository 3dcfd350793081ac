//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// There is no credential verification; the only failures are missing input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Login without an email or password.
    #[error("Email and password are required.")]
    MissingCredentials,

    /// Signup without a name, email or password.
    #[error("Name, email and password are required.")]
    MissingFields,
}
