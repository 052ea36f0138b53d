use std::{fmt, str::FromStr};

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::errors::I18nError;

/// A supported site language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Enum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Used when no valid preference is stored.
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// The language tag, also used for the document `lang` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts bare tags and region-qualified ones (`de-AT`, `en_GB`), in any case.
impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(I18nError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!(" de-AT ".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("en_GB".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(I18nError::UnknownLocale(tag)) if tag == "fr"
        ));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Locale::De).unwrap(), "\"de\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_display_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
