//! Chronological view of a schedule, and loading schedules from JSON.

use crate::types::{ScheduleEntry, ScheduleMap};
use crate::Result;
use std::path::Path;

/// Flatten a schedule into entries sorted by date, earliest first.
///
/// Sorting uses the date each key denotes, not its string form. Keys are
/// unique, so the order is total.
pub fn index_schedule(schedule: &ScheduleMap) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = schedule
        .iter()
        .map(|(date_key, dose_count)| ScheduleEntry {
            date_key: *date_key,
            dose_count: *dose_count,
        })
        .collect();

    entries.sort_by_key(|entry| entry.date_key.date());
    entries
}

/// Load a schedule from a JSON object keyed by `YYYY-MM-DD`.
///
/// ```json
/// { "2025-04-20": { "morning": 2, "afternoon": 1, "night": 2 } }
/// ```
///
/// Omitted periods count as zero doses. Unlike optional inputs elsewhere, a
/// missing or malformed file is an error: the caller asked for this file.
pub fn load_schedule(path: &Path) -> Result<ScheduleMap> {
    let contents = std::fs::read_to_string(path)?;
    let schedule: ScheduleMap = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} scheduled days from {:?}", schedule.len(), path);
    Ok(schedule)
}
