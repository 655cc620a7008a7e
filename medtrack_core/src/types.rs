//! Core domain types for the medication schedule.
//!
//! This module defines the fundamental types used throughout the system:
//! - Dose periods and per-day dose counts
//! - Date keys and the caller-owned schedule map
//! - The validated (year, month) pair accepted by the calendar
//! - Calendar cells and chronological list entries

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Dose Periods
// ============================================================================

/// Time-of-day bucket a dose is scheduled in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Afternoon,
    Night,
}

impl Period {
    /// All periods in the order they occur during a day
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Night];

    /// Capitalised label for headings and legends
    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Night => "Night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Night => "night",
        })
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Period::Morning),
            "afternoon" => Ok(Period::Afternoon),
            "night" => Ok(Period::Night),
            other => Err(Error::InvalidArgument(format!("unknown period: {}", other))),
        }
    }
}

/// Number of doses scheduled in each period of one calendar date.
///
/// A zero means "no dose in that period", never "unknown".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DoseCount {
    #[serde(default)]
    pub morning: u32,
    #[serde(default)]
    pub afternoon: u32,
    #[serde(default)]
    pub night: u32,
}

impl DoseCount {
    pub fn new(morning: u32, afternoon: u32, night: u32) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// Dose count for a single period
    pub fn get(&self, period: Period) -> u32 {
        match period {
            Period::Morning => self.morning,
            Period::Afternoon => self.afternoon,
            Period::Night => self.night,
        }
    }

    /// Doses across all periods, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.morning
            .saturating_add(self.afternoon)
            .saturating_add(self.night)
    }

    /// Periods with at least one dose, in day order
    pub fn scheduled_periods(&self) -> Vec<Period> {
        Period::ALL
            .into_iter()
            .filter(|p| self.get(*p) > 0)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.morning == 0 && self.afternoon == 0 && self.night == 0
    }
}

// ============================================================================
// Date Keys and the Schedule Map
// ============================================================================

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar date keyed by its canonical `YYYY-MM-DD` form.
///
/// Ordering and equality follow the date value; `Display` always produces the
/// zero-padded canonical string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build a key from a year, a 1-based month and a day of month
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateKey)
            .ok_or_else(|| Error::InvalidDateKey(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map_err(|_| Error::InvalidDateKey(s.to_string()))?;
        let key = DateKey(date);

        // chrono accepts unpadded fields and signed or 5-digit years;
        // keys must be canonical YYYY-MM-DD
        let year_in_range =
            (CalendarMonth::MIN_YEAR..=CalendarMonth::MAX_YEAR).contains(&date.year());
        if !year_in_range || key.to_string() != s {
            return Err(Error::InvalidDateKey(s.to_string()));
        }
        Ok(key)
    }
}

impl TryFrom<String> for DateKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// Caller-owned mapping from calendar date to that day's dose counts.
///
/// Carries no ordering; use [`crate::schedule::index_schedule`] for a
/// chronological view.
pub type ScheduleMap = HashMap<DateKey, DoseCount>;

// ============================================================================
// Calendar Month
// ============================================================================

/// A validated (year, zero-based month) pair.
///
/// This is the boundary where the calendar's preconditions are checked:
/// once constructed, grid building cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarMonth {
    year: i32,
    month0: u32,
}

impl CalendarMonth {
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    /// Validate a year and a zero-based month (0 = January)
    pub fn new(year: i32, month0: u32) -> Result<Self> {
        if month0 > 11 {
            return Err(Error::InvalidMonth(month0));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidYear(year));
        }
        Ok(Self { year, month0 })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January)
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month (1 = January)
    pub fn month_number(&self) -> u32 {
        self.month0 + 1
    }

    pub fn previous(&self) -> Result<Self> {
        match self.month0 {
            0 => Self::new(self.year - 1, 11),
            m => Self::new(self.year, m - 1),
        }
    }

    pub fn next(&self) -> Result<Self> {
        match self.month0 {
            11 => Self::new(self.year + 1, 0),
            m => Self::new(self.year, m + 1),
        }
    }

    /// Key for a day of this month, if that day exists
    pub fn date_key(&self, day: u32) -> Result<DateKey> {
        DateKey::new(self.year, self.month_number(), day)
    }

    /// Heading such as "April 2025"
    pub fn title(&self) -> String {
        const MONTH_NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// One position of the fixed 6x7 calendar grid
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DayCell {
    pub day_number: u32,
    pub belongs_to_requested_month: bool,
    /// Present only for cells of the requested month
    pub date_key: Option<DateKey>,
    /// Present only when `date_key` is a key of the schedule
    pub dose_count: Option<DoseCount>,
}

impl DayCell {
    pub(crate) fn outside(day_number: u32) -> Self {
        Self {
            day_number,
            belongs_to_requested_month: false,
            date_key: None,
            dose_count: None,
        }
    }

    pub fn has_doses(&self) -> bool {
        self.dose_count.is_some()
    }
}

/// One (date, dose count) pair of the chronological list view
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date_key: DateKey,
    pub dose_count: DoseCount,
}

impl ScheduleEntry {
    /// Long en-US date, e.g. "Sunday, April 20, 2025"
    pub fn long_label(&self) -> String {
        self.date_key.date().format("%A, %B %-d, %Y").to_string()
    }
}
