//! Stage outcomes and their normalization.

use std::fmt;

use serde::Serialize;

/// Result of a processing stage as stored in the `*_stat` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "NA")]
    NotApplicable,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "DONE",
            Self::Error => "ERROR",
            Self::NotApplicable => "NA",
        }
    }

    /// Normalize a reported outcome.
    ///
    /// Only the exact values `DONE` and `ERROR` are kept; anything else,
    /// including lower-case spellings, becomes `NA`.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "DONE" => Self::Done,
            "ERROR" => Self::Error,
            _ => Self::NotApplicable,
        }
    }

    /// `DONE` or `ERROR`, i.e. the stage actually reported a result.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
