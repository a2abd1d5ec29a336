//! Classification modes — which test a page runs and how its result is read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the two test modes a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationType {
    /// Hardness test: classifies the sample as soft or hard.
    SoftHard,
    /// Freshness test: classifies the sample as fresh or rotten.
    FreshRotten,
}

/// Which threshold input a test form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdField {
    Soft,
    Fresh,
}

impl ClassificationType {
    /// Wire name, as sent in `classification_type`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftHard => "soft_hard",
            Self::FreshRotten => "fresh_rotten",
        }
    }

    /// Page heading for this mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SoftHard => "Hardness",
            Self::FreshRotten => "Freshness",
        }
    }

    /// The threshold input shown on this mode's form.
    #[must_use]
    pub fn threshold_field(self) -> ThresholdField {
        match self {
            Self::SoftHard => ThresholdField::Soft,
            Self::FreshRotten => ThresholdField::Fresh,
        }
    }
}

impl fmt::Display for ClassificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown classification name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification type: {0}")]
pub struct UnknownClassification(pub String);

impl FromStr for ClassificationType {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft_hard" => Ok(Self::SoftHard),
            "fresh_rotten" => Ok(Self::FreshRotten),
            other => Err(UnknownClassification(other.to_string())),
        }
    }
}
