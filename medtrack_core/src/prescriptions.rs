//! Prescriptions and status filtering for the prescription list.

use crate::types::{DateKey, Period};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a prescription
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Expired,
}

impl PrescriptionStatus {
    pub fn label(self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Completed => "Completed",
            PrescriptionStatus::Expired => "Expired",
        }
    }
}

/// Which periods a prescribed medication is taken in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DoseTimes {
    #[serde(default)]
    pub morning: bool,
    #[serde(default)]
    pub afternoon: bool,
    #[serde(default)]
    pub night: bool,
}

impl DoseTimes {
    pub fn periods(&self) -> Vec<Period> {
        Period::ALL
            .into_iter()
            .filter(|p| match p {
                Period::Morning => self.morning,
                Period::Afternoon => self.afternoon,
                Period::Night => self.night,
            })
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrescribedMedication {
    pub name: String,
    pub dosage: String,
    pub schedule: DoseTimes,
    /// Free-form course length, e.g. "7 days"
    pub period: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prescription {
    pub date: DateKey,
    pub doctor_name: String,
    pub status: PrescriptionStatus,
    pub medications: Vec<PrescribedMedication>,
}

/// Status filter selected in the prescription list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(PrescriptionStatus),
}

impl StatusFilter {
    /// Every filter option in display order
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Status(PrescriptionStatus::Active),
        StatusFilter::Status(PrescriptionStatus::Completed),
        StatusFilter::Status(PrescriptionStatus::Expired),
    ];

    pub fn matches(self, prescription: &Prescription) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => prescription.status == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Status(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Status(PrescriptionStatus::Active)),
            "completed" => Ok(StatusFilter::Status(PrescriptionStatus::Completed)),
            "expired" => Ok(StatusFilter::Status(PrescriptionStatus::Expired)),
            other => Err(Error::InvalidArgument(format!(
                "unknown status filter: {}",
                other
            ))),
        }
    }
}

/// Prescriptions matching `filter`, in input order
pub fn filter_prescriptions(prescriptions: &[Prescription], filter: StatusFilter) -> Vec<&Prescription> {
    prescriptions.iter().filter(|p| filter.matches(p)).collect()
}
