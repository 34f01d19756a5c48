//! i18n - Internationalization Module
//!
//! Keyed text lookup over the `locales/` YAML files. Display strings never
//! live in the state layer; views ask for them here.

use rust_i18n::t;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// German
    De,
}

impl Locale {
    /// Language tag used by the locale files
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    /// Resolve a configured or detected tag, falling back to English
    pub fn from_tag_or_default(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s.split(['-', '_']).next().unwrap_or(s).to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(Error::Invalid {
                message: format!("Unsupported language: {s}"),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.tag()).into_owned()
}

/// Translate a key and fill in `%{name}` placeholders
///
/// # Example
/// ```ignore
/// // With translation `page = "Page %{page}"`
/// tr_format(Locale::En, "pager.page", &[("page", "3")])
/// // Returns "Page 3"
/// ```
pub fn tr_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = tr(locale, key);

    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_title_in_both_languages() {
        assert_eq!(tr(Locale::En, "app.title"), "Rick and Morty Characters");
        assert_eq!(tr(Locale::De, "app.title"), "Rick und Morty Charaktere");
    }

    #[test]
    fn status_labels_are_localized() {
        assert_eq!(tr(Locale::De, "status.alive"), "Lebendig");
        assert_eq!(tr(Locale::En, "status.unknown"), "Unknown");
    }

    #[test]
    fn fills_placeholders() {
        assert_eq!(tr_format(Locale::En, "pager.page", &[("page", "3")]), "Page 3");
        assert_eq!(
            tr_format(Locale::De, "app.error", &[("message", "offline")]),
            "Fehler! offline"
        );
    }

    #[test]
    fn parses_language_tags() {
        assert_eq!("de".parse::<Locale>().expect("de"), Locale::De);
        assert_eq!("en-US".parse::<Locale>().expect("en-US"), Locale::En);
        assert_eq!("de_AT".parse::<Locale>().expect("de_AT"), Locale::De);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn unknown_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag_or_default(Some("fr")), Locale::En);
        assert_eq!(Locale::from_tag_or_default(None), Locale::En);
        assert_eq!(Locale::from_tag_or_default(Some("de")), Locale::De);
    }
}
