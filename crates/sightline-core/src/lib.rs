use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub mod highlight;
pub mod nav;
pub mod progress;
pub mod session;
pub mod store;

// Re-export for convenience
pub use highlight::{Segment, guess_species, highlight, species_vocabulary};
pub use nav::{clamp_row, next_unreviewed, skip_all_for_url};
pub use progress::{TableProgress, UrlProgress, ValidationCounts};
pub use session::{RecordEdit, SessionState};
pub use store::{DEFAULT_DATA_PATH, DEFAULT_SAVE_PATH, SNAPSHOT_FILENAME, StorePaths};

/// Review status of a single sighting record.
///
/// The empty string is the on-disk marker for "not yet reviewed"; the three
/// reviewed states round-trip through the save file as exactly `valid`,
/// `needs review`, and `not valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Unreviewed,
    Valid,
    NeedsReview,
    NotValid,
}

impl Validation {
    /// The exact string stored in the CSV `validation` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreviewed => "",
            Self::Valid => "valid",
            Self::NeedsReview => "needs review",
            Self::NotValid => "not valid",
        }
    }

    /// Human-readable label (the empty on-disk marker reads as "unreviewed").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unreviewed => "unreviewed",
            other => other.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" => Some(Self::Unreviewed),
            "valid" => Some(Self::Valid),
            "needs review" => Some(Self::NeedsReview),
            "not valid" => Some(Self::NotValid),
            _ => None,
        }
    }

    pub fn is_reviewed(&self) -> bool {
        *self != Self::Unreviewed
    }

    /// Cycle through the three reviewed states (the form's status choice).
    pub fn cycle(self) -> Self {
        match self {
            Self::Unreviewed | Self::NotValid => Self::Valid,
            Self::Valid => Self::NeedsReview,
            Self::NeedsReview => Self::NotValid,
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Validation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Validation::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown validation status {s:?}")))
    }
}

/// One row of the working table.
///
/// Field order matches the save-file column order. The three annotation
/// columns default to empty so base datasets (and older save files) that lack
/// them load with the columns back-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingRecord {
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub species: String,
    pub sighting_date: String,
    pub dive_site: String,
    #[serde(default)]
    pub validation: Validation,
    #[serde(default)]
    pub notes: String,
    #[serde(default, rename = "N_observed")]
    pub n_observed: String,
}

impl SightingRecord {
    pub fn is_unreviewed(&self) -> bool {
        self.validation == Validation::Unreviewed
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("dataset file not found: {path}")]
    Missing { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_round_trips_through_wire_strings() {
        for v in [
            Validation::Unreviewed,
            Validation::Valid,
            Validation::NeedsReview,
            Validation::NotValid,
        ] {
            assert_eq!(Validation::parse(v.as_str()), Some(v));
        }
    }

    #[test]
    fn validation_parse_rejects_unknown() {
        assert_eq!(Validation::parse("maybe"), None);
    }

    #[test]
    fn validation_parse_trims_whitespace() {
        assert_eq!(Validation::parse("  valid "), Some(Validation::Valid));
        assert_eq!(Validation::parse("   "), Some(Validation::Unreviewed));
    }

    #[test]
    fn cycle_covers_the_three_reviewed_states() {
        let v = Validation::Unreviewed.cycle();
        assert_eq!(v, Validation::Valid);
        let v = v.cycle();
        assert_eq!(v, Validation::NeedsReview);
        let v = v.cycle();
        assert_eq!(v, Validation::NotValid);
        assert_eq!(v.cycle(), Validation::Valid);
    }
}
