//! Instrument identities and the registry of instruments the service accepts.
//!
//! Instruments carry no behaviour of their own; a report only needs to know
//! which row family it belongs to, so one closed enum covers all of them.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Every instrument the status tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Deimos,
    Esi,
    Hires,
    Kcwi,
    Lris,
    Mosfire,
    Nirc2,
    Nires,
    Nirspec,
    Osiris,
    /// Weather logging reports through the same endpoint as a pseudo-instrument.
    Weather,
}

impl Instrument {
    /// All known instruments, in name order.
    pub const ALL: [Instrument; 11] = [
        Self::Deimos,
        Self::Esi,
        Self::Hires,
        Self::Kcwi,
        Self::Lris,
        Self::Mosfire,
        Self::Nirc2,
        Self::Nires,
        Self::Nirspec,
        Self::Osiris,
        Self::Weather,
    ];

    /// Return the instrument name as stored in the `instr` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deimos => "deimos",
            Self::Esi => "esi",
            Self::Hires => "hires",
            Self::Kcwi => "kcwi",
            Self::Lris => "lris",
            Self::Mosfire => "mosfire",
            Self::Nirc2 => "nirc2",
            Self::Nires => "nires",
            Self::Nirspec => "nirspec",
            Self::Osiris => "osiris",
            Self::Weather => "weather",
        }
    }

    /// Parse an instrument from its lower-case name.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|instrument| instrument.as_str() == name)
            .ok_or_else(|| CoreError::UnknownInstrument(name.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of instruments a running service accepts reports for.
///
/// Built once at startup and shared read-only; there is no way to add or
/// remove instruments afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentRegistry {
    instruments: BTreeSet<Instrument>,
}

impl InstrumentRegistry {
    /// Registry accepting every known instrument.
    pub fn all() -> Self {
        Self {
            instruments: Instrument::ALL.into_iter().collect(),
        }
    }

    /// Build a registry from a list of instrument names.
    ///
    /// Blank entries are skipped. Any unrecognised name, or an empty result,
    /// is an error.
    pub fn from_names<'a, I>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let instruments = names
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Instrument::from_name)
            .collect::<Result<BTreeSet<_>, _>>()?;

        if instruments.is_empty() {
            return Err(CoreError::Validation(
                "instrument registry must contain at least one instrument".to_string(),
            ));
        }

        Ok(Self { instruments })
    }

    /// Resolve a reported instrument name against the registry.
    pub fn resolve(&self, name: &str) -> Result<Instrument, CoreError> {
        let instrument = Instrument::from_name(name)?;
        if self.instruments.contains(&instrument) {
            Ok(instrument)
        } else {
            Err(CoreError::UnknownInstrument(name.to_string()))
        }
    }

    pub fn contains(&self, instrument: Instrument) -> bool {
        self.instruments.contains(&instrument)
    }

    pub fn iter(&self) -> impl Iterator<Item = Instrument> + '_ {
        self.instruments.iter().copied()
    }
}

impl Default for InstrumentRegistry {
    fn default() -> Self {
        Self::all()
    }
}
