//! Display language for dates and result messages.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RecordDate;

const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Canadian French (default).
    #[default]
    Fr,
    /// English.
    En,
}

impl Locale {
    /// Returns the locale as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parses a language tag; only the primary subtag is considered.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Formats a record date for a card (`1 janv. 2024`, `Jan 1, 2024`).
    ///
    /// Unparsable dates are returned verbatim and missing dates as an empty
    /// string.
    #[must_use]
    pub fn format_date(self, date: &RecordDate) -> String {
        let Some(day) = date.calendar_date() else {
            return date.raw().trim().to_string();
        };
        let month = day.month0() as usize;
        match self {
            Self::Fr => format!("{} {} {}", day.day(), MONTHS_FR[month], day.year()),
            Self::En => format!("{} {}, {}", MONTHS_EN[month], day.day(), day.year()),
        }
    }

    /// Result-count message.
    ///
    /// Uses the library wording when every record is shown, the "M of N"
    /// wording otherwise. Plural agrees with the total.
    #[must_use]
    pub fn result_message(self, shown: usize, total: usize) -> String {
        let plural = if total == 1 { "" } else { "s" };
        match (self, shown == total) {
            (Self::Fr, true) => format!("{total} NFT{plural} dans la bibliothèque"),
            (Self::Fr, false) => format!("{shown} sur {total} NFT{plural}"),
            (Self::En, true) => format!("{total} item{plural} in library"),
            (Self::En, false) => format!("{shown} of {total} item{plural}"),
        }
    }

    /// Message shown when no record matches the filters.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Fr => "Aucun NFT ne correspond à vos critères.",
            Self::En => "No items match your filters.",
        }
    }

    /// Message shown in place of the grid when the catalog fails to load.
    #[must_use]
    pub const fn load_error_message(self) -> &'static str {
        match self {
            Self::Fr => "Erreur lors du chargement des données.",
            Self::En => "Error loading data.",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
