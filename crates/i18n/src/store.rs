//! The per-locale translation table.

use std::{
    fs,
    path::{Path, PathBuf},
};

use enum_map::EnumMap;
use serde_json::Value;

use crate::bundle::Bundle;
use crate::config::I18nConfig;
use crate::errors::I18nError;
use crate::locale::Locale;

const BASE_FILE: &str = "base.json";
const PARTITION_DIR: &str = "insights";

/// Every locale's assembled bundle, resident together.
///
/// Built once at startup and only read afterwards; share it behind an `Arc`.
/// Each bundle is its own tree, so nothing one locale returns aliases another.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    bundles: EnumMap<Locale, Bundle>,
}

impl TranslationStore {
    pub fn new(bundles: EnumMap<Locale, Bundle>) -> Self {
        Self { bundles }
    }

    /// Builds each locale's bundle with `build`.
    pub fn from_fn(build: impl FnMut(Locale) -> Bundle) -> Self {
        Self {
            bundles: EnumMap::from_fn(build),
        }
    }

    /// Loads every locale from `config.locales_dir`.
    pub fn load(config: &I18nConfig) -> Result<Self, I18nError> {
        Self::load_dir(&config.locales_dir, &config.namespace)
    }

    /// Loads `<root>/<tag>/base.json` plus every `<root>/<tag>/insights/*.json`
    /// for each locale, partitions in file-name order.
    pub fn load_dir(root: impl AsRef<Path>, namespace: &str) -> Result<Self, I18nError> {
        let root = root.as_ref();
        let mut bundles: EnumMap<Locale, Bundle> = EnumMap::default();

        for locale in Locale::ALL {
            let dir = root.join(locale.as_str());
            let base_path = dir.join(BASE_FILE);
            if !base_path.is_file() {
                return Err(I18nError::MissingBundle {
                    locale,
                    path: base_path,
                });
            }

            let base = read_json(&base_path)?;
            let partitions = partition_files(&dir.join(PARTITION_DIR))?
                .into_iter()
                .map(|path| read_json(&path))
                .collect::<Result<Vec<_>, _>>()?;

            tracing::debug!(
                %locale,
                partitions = partitions.len(),
                "assembled locale bundle"
            );
            bundles[locale] = Bundle::build(base, partitions, namespace);
        }

        Ok(Self { bundles })
    }

    pub fn bundle(&self, locale: Locale) -> &Bundle {
        &self.bundles[locale]
    }

    /// The string at `key` for `locale`, or `key` itself when unresolved.
    pub fn resolve<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.bundles[locale].resolve(key)
    }

    /// The value at `key` for `locale`, of any type.
    pub fn resolve_raw(&self, locale: Locale, key: &str) -> Option<&Value> {
        self.bundles[locale].resolve_raw(key)
    }
}

fn read_json(path: &Path) -> Result<Value, I18nError> {
    let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| I18nError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON files directly inside `dir`, sorted by name. A missing directory
/// means no partitions.
fn partition_files(dir: &Path) -> Result<Vec<PathBuf>, I18nError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let io_err = |source: std::io::Error| I18nError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
