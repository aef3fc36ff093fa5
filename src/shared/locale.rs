// src/shared/locale.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Locales served by the site. URL prefixes use the lowercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ka,
    Ru,
}

/// Locale a visitor lands on when nothing else is known.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Locale whose rows in `properties` are the source of truth.
pub const BASE_LOCALE: Locale = Locale::Ka;

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ka, Locale::Ru];

    /// Case-insensitive parse. `ge` is accepted for Georgian because legacy
    /// rows were tagged with it.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ka" | "ge" => Some(Locale::Ka),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Strict parse used for URL segments: only the canonical code matches.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == segment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ka => "ka",
            Locale::Ru => "ru",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == BASE_LOCALE
    }
}

impl Default for Locale {
    fn default() -> Self {
        BASE_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
