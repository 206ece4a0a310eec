//! Dataset source tag
//!
//! Identifies which upstream dataset a food came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upstream FoodData Central dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    Foundation,
    SrLegacy,
}

impl Source {
    /// Datasets in the order a full refresh imports them
    pub const ALL: [Source; 2] = [Source::Foundation, Source::SrLegacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Foundation => "FOUNDATION",
            Source::SrLegacy => "SR_LEGACY",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "FOUNDATION" => Some(Source::Foundation),
            "SR_LEGACY" | "SR LEGACY" | "SRLEGACY" => Some(Source::SrLegacy),
            _ => None,
        }
    }

    /// Human-readable dataset name for prompts and logs
    pub fn label(&self) -> &'static str {
        match self {
            Source::Foundation => "Foundation",
            Source::SrLegacy => "SR Legacy",
        }
    }

    /// Environment variable that may hold this dataset's URL
    pub fn url_env_var(&self) -> &'static str {
        match self {
            Source::Foundation => "FDC_FOUNDATION_URL",
            Source::SrLegacy => "FDC_SR_LEGACY_URL",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
