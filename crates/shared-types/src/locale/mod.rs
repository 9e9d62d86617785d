//! Localization service
//!
//! Every user-facing word in a report is looked up by key through a
//! [`Translator`] passed in by the caller. [`Catalog`] is the built-in
//! implementation backed by static dictionaries.

mod en;
mod fr;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Key-based string lookup with `{{name}}` interpolation
pub trait Translator {
    fn locale(&self) -> Locale;

    /// Look up `key` and substitute `vars`
    ///
    /// Implementations must always return something printable; an unknown
    /// key comes back as the key itself.
    fn translate(&self, key: &str, vars: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

lazy_static! {
    static ref EN_TABLE: HashMap<&'static str, &'static str> = en::ENTRIES.iter().copied().collect();
    static ref FR_TABLE: HashMap<&'static str, &'static str> = fr::ENTRIES.iter().copied().collect();
}

/// Translator backed by the built-in dictionaries
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn table(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
        match locale {
            Locale::En => &EN_TABLE,
            Locale::Fr => &FR_TABLE,
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        Self::table(self.locale)
            .get(key)
            .or_else(|| EN_TABLE.get(key))
            .copied()
    }
}

impl Translator for Catalog {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn translate(&self, key: &str, vars: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(template) => interpolate(template, vars),
            None => {
                tracing::warn!(key, locale = self.locale.code(), "missing translation key");
                key.to_string()
            }
        }
    }
}

/// Replace `{{name}}` placeholders with their values
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Long-form localized date, e.g. "October 19, 2026" or "19 octobre 2026"
pub fn format_date(translator: &dyn Translator, date: NaiveDate) -> String {
    let month = translator.t(&format!("date.month.{}", date.month()));
    let day = date.day().to_string();
    let year = date.year().to_string();
    translator.translate(
        "date.long",
        &[
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parses_language_tags() {
        assert_eq!("fr-CA".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::En);
        assert!("zh".parse::<Locale>().is_err());
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(
            interpolate("{{a}} and {{b}} and {{a}}", &[("a", "x"), ("b", "y")]),
            "x and y and x"
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_french_falls_back_to_english_and_both_cover_same_keys() {
        for (key, _) in en::ENTRIES {
            assert!(
                FR_TABLE.contains_key(key),
                "French dictionary is missing '{}'",
                key
            );
        }
        for (key, _) in fr::ENTRIES {
            assert!(EN_TABLE.contains_key(key), "unexpected French key '{}'", key);
        }
    }

    #[test]
    fn test_format_date_per_locale() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_date(&Catalog::new(Locale::En), date), "October 19, 2026");
        assert_eq!(format_date(&Catalog::new(Locale::Fr), date), "19 octobre 2026");
    }
}
