//! Shopper preferences.

use serde::{Deserialize, Serialize};

/// Category label that means "no preference".
pub const ALL_CATEGORIES: &str = "All";

/// Persisted shopper preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Category to surface first in featured listings.
    #[serde(default)]
    pub preferred_category: Option<String>,
}

impl UserPreferences {
    /// The preferred category, treating blank and `"All"` as no preference.
    #[must_use]
    pub fn effective_category(&self) -> Option<&str> {
        self.preferred_category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_category() {
        let mut prefs = UserPreferences::default();
        assert_eq!(prefs.effective_category(), None);

        prefs.preferred_category = Some("All".to_string());
        assert_eq!(prefs.effective_category(), None);

        prefs.preferred_category = Some("Hoodies".to_string());
        assert_eq!(prefs.effective_category(), Some("Hoodies"));
    }

    #[test]
    fn test_stored_shape() {
        let prefs = UserPreferences {
            preferred_category: Some("Caps".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&prefs).unwrap(),
            r#"{"preferredCategory":"Caps"}"#
        );

        let cleared: UserPreferences =
            serde_json::from_str(r#"{"preferredCategory":null}"#).unwrap();
        assert_eq!(cleared, UserPreferences::default());
    }
}
