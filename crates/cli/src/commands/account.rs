//! Account commands: sign-in state and preferences.

use chapter_two_storefront::AppState;
use chapter_two_storefront::services::AuthError;

use super::output;
use crate::{AuthAction, PrefsAction};

/// Run an auth command and print the signed-in shopper.
///
/// # Errors
///
/// Returns `AuthError` if login or signup input is incomplete.
pub async fn auth(state: &mut AppState, action: AuthAction) -> Result<(), AuthError> {
    let result = match action {
        AuthAction::Login { email, password } => {
            state.auth_mut().login(&email, &password).await.map(drop)
        }
        AuthAction::Signup {
            name,
            email,
            password,
        } => state
            .auth_mut()
            .signup(&name, &email, &password)
            .await
            .map(drop),
        AuthAction::Logout => {
            state.auth_mut().logout();
            Ok(())
        }
        AuthAction::Whoami => Ok(()),
    };
    output::print_user(state.auth().current_user());
    result
}

/// Run a preferences command and print the preferences.
pub fn prefs(state: &mut AppState, action: PrefsAction) {
    match action {
        PrefsAction::Show => {}
        PrefsAction::Set { category } => state
            .preferences_mut()
            .set_preferred_category(Some(category)),
        PrefsAction::Clear => state.preferences_mut().set_preferred_category(None),
    }
    output::print_preferences(state.preferences().preferences());
}
