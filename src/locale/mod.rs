use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub mod catalog;
pub mod store;

pub use store::{LocaleStore, PrefsBackend};

/// Languages the site ships copy for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    /// Text direction is derived from the language, never set on its own.
    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn document_title(self) -> &'static str {
        match self {
            Language::En => "LoginHR - HR Solutions",
            Language::Ar => "LoginHR - حلول الموارد البشرية",
        }
    }
}

/// A string carried in both site languages, resolved against the active one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Snapshot handed to subscribers so they can apply document-level effects
/// (dir attribute, body class, title) without reaching back into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentState {
    pub language: Language,
    pub direction: Direction,
    pub title: &'static str,
}

impl DocumentState {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
            title: language.document_title(),
        }
    }
}
