//! Status categories: the pipeline stage a report is about.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Processing stage being reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusCategory {
    /// Metadata (DQA) generation.
    Meta,
    /// Level-0 transfer.
    Level0,
    /// Level-1 reduction.
    Level1,
    /// Level-2 reduction. Reserved.
    Level2,
    /// Receipt of a transfer by the downstream archive.
    TransferReceipt,
    /// PSF reconstruction. Reserved.
    PsfReconstruction,
    /// Weather logging. Never touches the store.
    Weather,
}

/// Canonical category keys.
const VALID_CATEGORY_KEYS: &[&str] = &[
    "meta",
    "level0",
    "level1",
    "level2",
    "transferReceipt",
    "psfReconstruction",
    "weather",
];

impl StatusCategory {
    pub const ALL: [StatusCategory; 7] = [
        Self::Meta,
        Self::Level0,
        Self::Level1,
        Self::Level2,
        Self::TransferReceipt,
        Self::PsfReconstruction,
        Self::Weather,
    ];

    /// Return the canonical category key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Level0 => "level0",
            Self::Level1 => "level1",
            Self::Level2 => "level2",
            Self::TransferReceipt => "transferReceipt",
            Self::PsfReconstruction => "psfReconstruction",
            Self::Weather => "weather",
        }
    }

    /// Parse a category key.
    ///
    /// Accepts the canonical keys as well as the short keys the existing
    /// pipeline stages send (`lev0`, `lev1`, `lev2`, `trs`, `psfr`).
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key {
            "meta" => Ok(Self::Meta),
            "level0" | "lev0" => Ok(Self::Level0),
            "level1" | "lev1" => Ok(Self::Level1),
            "level2" | "lev2" => Ok(Self::Level2),
            "transferReceipt" | "trs" => Ok(Self::TransferReceipt),
            "psfReconstruction" | "psfr" => Ok(Self::PsfReconstruction),
            "weather" => Ok(Self::Weather),
            "" => Err(CoreError::UnknownCategory(
                "'' (category must not be empty)".to_string(),
            )),
            _ => Err(CoreError::UnknownCategory(format!(
                "'{key}'. Must be one of: {}",
                VALID_CATEGORY_KEYS.join(", ")
            ))),
        }
    }

    /// Whether this category answers with the structured acknowledgment.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::TransferReceipt)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
