//! Shopper preferences.

use std::sync::Arc;

use crate::models::UserPreferences;
use crate::models::preferences::ALL_CATEGORIES;
use crate::notify::{Notice, SharedNotifier};
use crate::storage::{KeyValueStore, PersistedReducer, Reducer, keys};

/// Actions accepted by [`UserPreferences`].
#[derive(Debug, Clone)]
pub enum PreferencesAction {
    SetPreferredCategory(Option<String>),
}

impl Reducer for UserPreferences {
    type Action = PreferencesAction;
    type Snapshot = Self;

    fn reduce(&mut self, action: PreferencesAction) {
        match action {
            PreferencesAction::SetPreferredCategory(category) => {
                self.preferred_category = category;
            }
        }
    }

    fn snapshot(&self) -> Option<Self> {
        Some(self.clone())
    }

    fn restore(stored: Self) -> Self {
        stored
    }
}

/// Preferences container.
pub struct Preferences {
    inner: PersistedReducer<UserPreferences>,
    notifier: SharedNotifier,
}

impl Preferences {
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, notifier: SharedNotifier) -> Self {
        Self {
            inner: PersistedReducer::hydrate(store, keys::USER_PREFERENCES),
            notifier,
        }
    }

    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        self.inner.state()
    }

    /// The category to surface first, if any.
    #[must_use]
    pub fn preferred_category(&self) -> Option<&str> {
        self.preferences().effective_category()
    }

    /// Set or clear the preferred category. Blank and `"All"` clear it.
    pub fn set_preferred_category(&mut self, category: Option<String>) {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

        let notice = category.as_ref().map_or_else(
            || Notice::info("Preferred category cleared."),
            |c| Notice::success(format!("Preferred category set to: {c}")),
        );
        tracing::debug!(category = ?category, "Preferred category changed");

        self.inner
            .dispatch(PreferencesAction::SetPreferredCategory(category));
        self.notifier.notify(notice);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStore;

    fn preferences() -> (Preferences, Arc<RecordingNotifier>, Arc<dyn KeyValueStore>) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let prefs = Preferences::hydrate(Arc::clone(&store), notifier.clone());
        (prefs, notifier, store)
    }

    #[test]
    fn test_set_and_persist() {
        let (mut prefs, notifier, store) = preferences();
        prefs.set_preferred_category(Some("Hoodies".to_string()));

        assert_eq!(prefs.preferred_category(), Some("Hoodies"));
        assert_eq!(
            store.get(keys::USER_PREFERENCES).unwrap().as_deref(),
            Some(r#"{"preferredCategory":"Hoodies"}"#)
        );
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Preferred category set to: Hoodies")
        );

        let reloaded = Preferences::hydrate(store, notifier);
        assert_eq!(reloaded.preferred_category(), Some("Hoodies"));
    }

    #[test]
    fn test_all_clears_preference() {
        let (mut prefs, notifier, store) = preferences();
        prefs.set_preferred_category(Some("Caps".to_string()));
        prefs.set_preferred_category(Some("All".to_string()));

        assert_eq!(prefs.preferred_category(), None);
        assert_eq!(
            store.get(keys::USER_PREFERENCES).unwrap().as_deref(),
            Some(r#"{"preferredCategory":null}"#)
        );
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Preferred category cleared.")
        );
    }
}
