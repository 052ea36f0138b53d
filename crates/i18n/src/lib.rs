//! Localization for the summit site.
//!
//! Each locale's bundle is assembled once at startup from a base tree and
//! partitioned article content, then looked up by dotted key paths. A key
//! that does not resolve to a string comes back unchanged, so missing
//! translations show up in the rendered page instead of failing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use i18n::prelude::*;
//!
//! let config = I18nConfig::from_env();
//! let store = Arc::new(TranslationStore::load(&config)?);
//! let prefs = Arc::new(FilePreferences::new("preferences.json"));
//!
//! let mut ctx = LocalizationContext::from_config(store, prefs, &config);
//! println!("{}", ctx.t("home.hero.title"));
//!
//! ctx.set_locale(Locale::De);
//! println!("{}", ctx.t("cases[0].title"));
//! ```

pub mod bundle;
pub mod config;
pub mod context;
pub mod errors;
pub mod insights;
pub mod locale;
pub mod path;
pub mod preferences;
pub mod store;

pub use bundle::{Bundle, DEFAULT_NAMESPACE, deep_merge};
pub use config::I18nConfig;
pub use context::LocalizationContext;
pub use errors::I18nError;
pub use locale::Locale;
pub use store::TranslationStore;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::bundle::{Bundle, DEFAULT_NAMESPACE, deep_merge};
    pub use crate::config::I18nConfig;
    pub use crate::context::LocalizationContext;
    pub use crate::insights::{ArticleSummary, Page, categories, list_articles, paginate};
    pub use crate::locale::Locale;
    pub use crate::preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
    pub use crate::store::TranslationStore;
}
