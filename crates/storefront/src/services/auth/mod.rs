//! Authentication service.
//!
//! Mock login and signup: any non-empty input succeeds after a simulated
//! round-trip. The signed-in user is persisted until logout.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;
use uuid::Uuid;

use chapter_two_core::UserId;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::User;
use crate::notify::{Notice, SharedNotifier};
use crate::storage::{KeyValueStore, PersistedReducer, Reducer, keys};

/// ID handed out by the demo login.
pub const DEMO_USER_ID: &str = "user-123";

/// Display name of the demo login user.
pub const DEMO_USER_NAME: &str = "Demo User";

/// Actions accepted by [`AuthState`].
#[derive(Debug, Clone)]
pub enum AuthAction {
    SignIn(User),
    SignOut,
}

/// The current user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Reducer for AuthState {
    type Action = AuthAction;
    type Snapshot = User;

    fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::SignIn(user) => self.user = Some(user),
            AuthAction::SignOut => self.user = None,
        }
    }

    // Signed out removes the stored key.
    fn snapshot(&self) -> Option<User> {
        self.user.clone()
    }

    fn restore(user: User) -> Self {
        Self { user: Some(user) }
    }
}

/// Authentication container.
pub struct Auth {
    inner: PersistedReducer<AuthState>,
    notifier: SharedNotifier,
    delay: Duration,
}

impl Auth {
    /// Hydrate the current user from `store`.
    ///
    /// `delay` is the simulated latency of login and signup.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, notifier: SharedNotifier, delay: Duration) -> Self {
        let inner = PersistedReducer::<AuthState>::hydrate(store, keys::AUTH_USER);
        if let Some(user) = inner.state().user() {
            set_sentry_user(&user.id, Some(&user.email));
        }
        Self {
            inner,
            notifier,
            delay,
        }
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.inner.state().user()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.inner.state().is_authenticated()
    }

    /// Sign in as the demo user bound to `email`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is empty.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;

        if email.is_empty() || password.is_empty() {
            self.notifier
                .notify(Notice::error("Login failed. Please check your credentials."));
            return Err(AuthError::MissingCredentials);
        }

        let user = User {
            id: UserId::new(DEMO_USER_ID),
            name: DEMO_USER_NAME.to_string(),
            email: email.to_string(),
        };
        self.sign_in(user.clone());
        self.notifier.notify(Notice::success("Logged in successfully!"));
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty.
    #[instrument(skip(self, password))]
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            self.notifier
                .notify(Notice::error("Signup failed. Please fill in all fields."));
            return Err(AuthError::MissingFields);
        }

        let user = User {
            id: UserId::new(format!("user-{}", Uuid::new_v4().simple())),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.sign_in(user.clone());
        self.notifier
            .notify(Notice::success("Account created successfully!"));
        tracing::info!(user_id = %user.id, "User signed up");

        Ok(user)
    }

    /// Forget the current user.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        self.inner.dispatch(AuthAction::SignOut);
        clear_sentry_user();
        self.notifier.notify(Notice::info("Logged out."));
    }

    fn sign_in(&mut self, user: User) {
        set_sentry_user(&user.id, Some(&user.email));
        self.inner.dispatch(AuthAction::SignIn(user));
    }
}
