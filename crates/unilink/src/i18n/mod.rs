//! Localized UI strings.
//!
//! Lookup is two-level: locale, then key. A key missing from the requested
//! locale falls back to English, and a key missing there too resolves to
//! itself so the UI shows something readable.

mod en;
mod ru;
mod uz;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

type Table = &'static [(&'static str, &'static str)];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_tables(&[
        (Locale::En, en::ENTRIES),
        (Locale::Ru, ru::ENTRIES),
        (Locale::Uz, uz::ENTRIES),
    ])
});

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Ru,
    Uz,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Uz];

    /// Locale consulted when a key is missing from the requested one.
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Uz => "uz",
        }
    }
}

/// The string is not a supported locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale: {0:?}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            "uz" => Ok(Locale::Uz),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation tables for every locale.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

impl Catalog {
    /// The tables compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_tables(tables: &[(Locale, Table)]) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|(locale, entries)| (*locale, entries.iter().copied().collect()))
                .collect(),
        }
    }

    /// Looks `key` up in `locale` only.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.tables.get(&locale)?.get(key).copied()
    }

    /// Resolves `key` in `locale`, then in [`Locale::FALLBACK`], then returns
    /// the key itself.
    pub fn t<'k>(&self, locale: Locale, key: &'k str) -> &'k str {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::FALLBACK, key))
            .unwrap_or(key)
    }

    /// Every string of `locale`, with missing keys filled from the fallback.
    pub fn table(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        let mut merged = BTreeMap::new();
        for source in [Locale::FALLBACK, locale] {
            if let Some(table) = self.tables.get(&source) {
                merged.extend(table.iter().map(|(k, v)| (*k, *v)));
            }
        }
        merged
    }

    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
        }
    }
}

/// A catalog bound to the active locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'c> {
    catalog: &'c Catalog,
    locale: Locale,
}

impl Translator<'_> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.catalog.t(self.locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const SMALL_EN: Table = &[("nav.home", "Home"), ("nav.clubs", "Clubs")];
    const SMALL_RU: Table = &[("nav.home", "Главная")];

    fn small_catalog() -> Catalog {
        Catalog::from_tables(&[(Locale::En, SMALL_EN), (Locale::Ru, SMALL_RU)])
    }

    #[test]
    fn test_fallback_chain() {
        let catalog = small_catalog();
        assert_eq!(catalog.t(Locale::Ru, "nav.home"), "Главная");
        assert_eq!(catalog.t(Locale::Ru, "nav.clubs"), "Clubs");
        assert_eq!(catalog.t(Locale::Uz, "nav.clubs"), "Clubs");
        assert_eq!(catalog.t(Locale::Ru, "nav.unknown"), "nav.unknown");
    }

    #[test]
    fn test_merged_table() {
        let table = small_catalog().table(Locale::Ru);
        assert_eq!(table["nav.home"], "Главная");
        assert_eq!(table["nav.clubs"], "Clubs");
    }

    #[test]
    fn test_builtin_locales_share_keys() {
        let catalog = Catalog::builtin();
        let keys = |locale: Locale| catalog.tables[&locale].keys().copied().collect::<BTreeSet<_>>();

        assert_eq!(keys(Locale::En), keys(Locale::Ru));
        assert_eq!(keys(Locale::En), keys(Locale::Uz));
    }

    #[test]
    fn test_builtin_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.t(Locale::Uz, "schedule.day.monday"), "Dushanba");
        assert_eq!(catalog.t(Locale::En, "zod.time.invalid"), "Invalid time format (HH:MM).");
        assert_eq!(catalog.translator(Locale::Ru).t("nav.profile"), "Профиль");
    }

    #[test]
    fn test_every_validation_key_is_translated() {
        use crate::schedule::{AppointmentType, Weekday};

        let catalog = Catalog::builtin();
        let mut keys = vec![
            "zod.course.min",
            "zod.professor.min",
            "zod.room.min",
            "zod.time.invalid",
            "zod.day.invalid",
            "zod.type.invalid",
            "zod.club.avatar_url.invalid",
        ];
        keys.extend(Weekday::ALL.iter().map(|d| d.translation_key()));
        keys.extend(Weekday::ALL.iter().map(|d| d.abbreviation_key()));
        keys.extend([
            AppointmentType::Lecture.translation_key(),
            AppointmentType::Seminar.translation_key(),
            AppointmentType::Lab.translation_key(),
        ]);

        for locale in Locale::ALL {
            for key in &keys {
                assert!(catalog.lookup(locale, key).is_some(), "{locale}: {key}");
            }
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!("uz".parse::<Locale>().unwrap(), Locale::Uz);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ru);
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }
}
