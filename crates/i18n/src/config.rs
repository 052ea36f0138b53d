//! Configuration for loading and selecting locales.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::DEFAULT_NAMESPACE;
use crate::locale::Locale;

/// Preference key under which the chosen locale is stored.
pub const DEFAULT_PREFERENCE_KEY: &str = "locale";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding one subdirectory per locale tag.
    pub locales_dir: PathBuf,
    /// Locale used when no valid preference is stored.
    pub default_locale: Locale,
    /// Dotted path where article partitions are mounted.
    pub namespace: String,
    /// Preference key for the chosen locale.
    pub preference_key: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("./locales"),
            default_locale: Locale::DEFAULT,
            namespace: DEFAULT_NAMESPACE.to_string(),
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
        }
    }
}

impl I18nConfig {
    /// Reads `LOCALES_DIR` and `DEFAULT_LOCALE`, keeping defaults for
    /// anything unset. An unrecognized `DEFAULT_LOCALE` is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LOCALES_DIR") {
            config.locales_dir = PathBuf::from(dir);
        }

        if let Ok(tag) = env::var("DEFAULT_LOCALE") {
            match tag.parse() {
                Ok(locale) => config.default_locale = locale,
                Err(e) => tracing::warn!("Ignoring DEFAULT_LOCALE: {e}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = I18nConfig::default();
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.namespace, "insights.articles");
        assert_eq!(config.preference_key, "locale");
    }

    #[test]
    fn test_partial_json() {
        let config: I18nConfig =
            serde_json::from_str(r#"{ "default_locale": "de", "locales_dir": "/srv/locales" }"#)
                .unwrap();
        assert_eq!(config.default_locale, Locale::De);
        assert_eq!(config.locales_dir, PathBuf::from("/srv/locales"));
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }
}
