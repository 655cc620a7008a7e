//! Today's dose checklist, grouped by period.
//!
//! The checklist is plain in-memory state owned by the caller; marking a dose
//! taken is a toggle, not an append-only log.

use crate::types::Period;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single named dose on the checklist (e.g. "Aspirin", "1 tablet")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dose {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub taken: bool,
}

impl Dose {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            taken: false,
        }
    }
}

/// The day's doses for each period
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DailyChecklist {
    #[serde(default)]
    pub morning: Vec<Dose>,
    #[serde(default)]
    pub afternoon: Vec<Dose>,
    #[serde(default)]
    pub night: Vec<Dose>,
}

impl DailyChecklist {
    pub fn doses(&self, period: Period) -> &[Dose] {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
            Period::Night => &self.night,
        }
    }

    fn doses_mut(&mut self, period: Period) -> &mut Vec<Dose> {
        match period {
            Period::Morning => &mut self.morning,
            Period::Afternoon => &mut self.afternoon,
            Period::Night => &mut self.night,
        }
    }

    /// Flip the `taken` flag of one dose and return its new value
    pub fn toggle_taken(&mut self, period: Period, index: usize) -> Result<bool> {
        let dose = self
            .doses_mut(period)
            .get_mut(index)
            .ok_or(Error::DoseNotFound { period, index })?;

        dose.taken = !dose.taken;
        tracing::debug!("{} dose {:?} taken = {}", period, dose.name, dose.taken);
        Ok(dose.taken)
    }

    /// Number of doses not yet taken
    pub fn remaining(&self) -> usize {
        Period::ALL
            .iter()
            .flat_map(|p| self.doses(*p))
            .filter(|d| !d.taken)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

/// Parse a `period:index` selector such as `morning:0`
pub fn parse_dose_selector(s: &str) -> Result<(Period, usize)> {
    let (period, index) = s.split_once(':').ok_or_else(|| {
        Error::InvalidArgument(format!("expected period:index, got {:?}", s))
    })?;

    let period: Period = period.parse()?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| Error::InvalidArgument(format!("bad dose index {:?}: {}", index, e)))?;

    Ok((period, index))
}
