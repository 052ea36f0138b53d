use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Missing base bundle for {locale} at {}", path.display())]
    MissingBundle { locale: Locale, path: PathBuf },

    #[error("Preference store error: {0}")]
    Preferences(String),
}
