//! The active-locale handle passed to whatever renders text.

use std::sync::Arc;

use serde_json::Value;

use crate::config::{DEFAULT_PREFERENCE_KEY, I18nConfig};
use crate::locale::Locale;
use crate::preferences::PreferenceStore;
use crate::store::TranslationStore;

/// Resolves keys against the active locale and remembers the user's choice.
///
/// Switching locale is a synchronous swap: every bundle is already resident
/// in the shared store. The chosen locale is written to the preference
/// store; a failed write is logged and does not undo the switch.
pub struct LocalizationContext {
    store: Arc<TranslationStore>,
    preferences: Arc<dyn PreferenceStore>,
    preference_key: String,
    active: Locale,
}

impl LocalizationContext {
    /// Creates a context, restoring the locale saved under `"locale"` and
    /// falling back to [`Locale::DEFAULT`].
    pub fn new(store: Arc<TranslationStore>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self::restore(
            store,
            preferences,
            DEFAULT_PREFERENCE_KEY.to_string(),
            Locale::DEFAULT,
        )
    }

    /// Creates a context using the key and fallback locale from `config`.
    pub fn from_config(
        store: Arc<TranslationStore>,
        preferences: Arc<dyn PreferenceStore>,
        config: &I18nConfig,
    ) -> Self {
        Self::restore(
            store,
            preferences,
            config.preference_key.clone(),
            config.default_locale,
        )
    }

    fn restore(
        store: Arc<TranslationStore>,
        preferences: Arc<dyn PreferenceStore>,
        preference_key: String,
        fallback: Locale,
    ) -> Self {
        let active = match preferences.get(&preference_key) {
            Ok(Some(tag)) => tag.parse().unwrap_or_else(|_| {
                tracing::debug!("Stored locale {tag:?} not recognized, using {fallback}");
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Could not read locale preference: {e}");
                fallback
            }
        };

        Self {
            store,
            preferences,
            preference_key,
            active,
        }
    }

    pub fn active_locale(&self) -> Locale {
        self.active
    }

    /// Value for the document `lang` attribute.
    pub fn lang_attribute(&self) -> &'static str {
        self.active.as_str()
    }

    /// Makes `locale` active and persists the choice.
    pub fn set_locale(&mut self, locale: Locale) {
        self.active = locale;
        if let Err(e) = self.preferences.set(&self.preference_key, locale.as_str()) {
            tracing::warn!("Could not persist locale preference: {e}");
        }
        tracing::debug!(%locale, "active locale changed");
    }

    /// The string at `key` in the active locale, or `key` itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.store.resolve(self.active, key)
    }

    /// The value at `key` in the active locale, of any type.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.store.resolve_raw(self.active, key)
    }

    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }
}
