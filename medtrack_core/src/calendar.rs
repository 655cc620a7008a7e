//! Month grid construction for the calendar view.
//!
//! A month is always laid out as 6 rows of 7 days, Sunday first, so the cell
//! at position `i` falls on weekday `i % 7`. Positions before the 1st and
//! after the last day are filled with the neighbouring months' day numbers.

use crate::types::{CalendarMonth, DayCell, ScheduleMap};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// Column headings, Sunday first
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a zero-based month
///
/// # Panics
/// If `month0` is outside 0-11.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month {} outside 0-11", month0),
    }
}

/// Weekday of the 1st of a zero-based month (0 = Sunday ... 6 = Saturday)
///
/// # Panics
/// If `month0` is outside 0-11 or the year is beyond chrono's range.
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
        Some(first) => first.weekday().num_days_from_sunday(),
        None => panic!("no 1st of month {} in year {}", month0, year),
    }
}

/// A fully laid-out month: exactly [`GRID_CELLS`] cells
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: CalendarMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid as six week rows of seven cells
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn in_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.belongs_to_requested_month)
    }

    /// Cells of the requested month that carry a dose count
    pub fn scheduled_days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.has_doses())
    }
}

/// Lay out `month` as a 6x7 grid, attaching the schedule's dose counts to the
/// days of the requested month.
///
/// The schedule is only read; entries outside the month are ignored.
pub fn build_month_grid(month: CalendarMonth, schedule: &ScheduleMap) -> MonthGrid {
    let (year, month0) = (month.year(), month.month0());
    let days = days_in_month(year, month0);
    let leading = first_weekday(year, month0);

    let (prev_year, prev_month0) = match month0 {
        0 => (year - 1, 11),
        m => (year, m - 1),
    };
    let prev_days = days_in_month(prev_year, prev_month0);

    tracing::debug!(
        "Building grid for {}: {} days, first weekday {}",
        month.title(),
        days,
        leading
    );

    let mut cells = Vec::with_capacity(GRID_CELLS);

    // Tail of the previous month
    for day in (prev_days - leading + 1)..=prev_days {
        cells.push(DayCell::outside(day));
    }

    for day in 1..=days {
        let date_key = month.date_key(day).ok();
        let dose_count = date_key.and_then(|key| schedule.get(&key).copied());
        cells.push(DayCell {
            day_number: day,
            belongs_to_requested_month: true,
            date_key,
            dose_count,
        });
    }

    // Head of the next month
    let mut next_day = 1;
    while cells.len() < GRID_CELLS {
        cells.push(DayCell::outside(next_day));
        next_day += 1;
    }

    MonthGrid { month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateKey, DoseCount};
    use chrono::Days;

    fn month(year: i32, month0: u32) -> CalendarMonth {
        CalendarMonth::new(year, month0).unwrap()
    }

    fn april_schedule() -> ScheduleMap {
        let mut schedule = ScheduleMap::new();
        schedule.insert("2025-04-20".parse().unwrap(), DoseCount::new(2, 1, 2));
        schedule
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2100, 1), 28);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn test_first_weekday() {
        // April 2025 starts on a Tuesday
        assert_eq!(first_weekday(2025, 3), 2);
        // June 2025 starts on a Sunday
        assert_eq!(first_weekday(2025, 5), 0);
        // February 2025 starts on a Saturday
        assert_eq!(first_weekday(2025, 1), 6);
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for year in [1900, 2000, 2023, 2024, 2025, 9999] {
            for m in 0..12 {
                let grid = build_month_grid(month(year, m), &ScheduleMap::new());
                assert_eq!(grid.cells().len(), GRID_CELLS, "{}-{}", year, m);
                assert_eq!(grid.rows().count(), GRID_ROWS);
            }
        }
    }

    #[test]
    fn test_grid_positions_match_weekdays() {
        for m in 0..12 {
            let grid = build_month_grid(month(2025, m), &ScheduleMap::new());
            for (i, cell) in grid.cells().iter().enumerate() {
                if let Some(key) = cell.date_key {
                    assert_eq!(
                        key.date().weekday().num_days_from_sunday() as usize,
                        i % GRID_COLUMNS
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_cell_continues_the_real_calendar() {
        for year in [2023, 2024, 2025] {
            for m in 0..12 {
                let grid = build_month_grid(month(year, m), &ScheduleMap::new());
                let first = NaiveDate::from_ymd_opt(year, m + 1, 1).unwrap();
                let leading = first_weekday(year, m) as u64;
                let grid_start = first.checked_sub_days(Days::new(leading)).unwrap();

                for (i, cell) in grid.cells().iter().enumerate() {
                    let date = grid_start.checked_add_days(Days::new(i as u64)).unwrap();
                    assert_eq!(cell.day_number, date.day(), "{}-{} cell {}", year, m, i);
                    assert_eq!(
                        date.weekday().num_days_from_sunday() as usize,
                        i % GRID_COLUMNS
                    );
                    assert_eq!(cell.belongs_to_requested_month, date.month0() == m);
                    if cell.belongs_to_requested_month {
                        assert_eq!(cell.date_key, Some(DateKey::from_date(date)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_april_2025_layout() {
        let grid = build_month_grid(month(2025, 3), &ScheduleMap::new());
        let cells = grid.cells();

        // March 2025 has 31 days; Tuesday start leaves two leading cells
        assert_eq!(cells[0], DayCell::outside(30));
        assert_eq!(cells[1], DayCell::outside(31));
        assert!(cells[2].belongs_to_requested_month);
        assert_eq!(cells[2].day_number, 1);
        assert_eq!(cells[2].date_key, Some("2025-04-01".parse().unwrap()));

        // 2 leading + 30 days leaves 10 trailing cells numbered from 1
        assert_eq!(cells[31].day_number, 30);
        assert_eq!(cells[32], DayCell::outside(1));
        assert_eq!(cells[41], DayCell::outside(10));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        let grid = build_month_grid(month(2025, 5), &ScheduleMap::new());
        assert!(grid.cells()[0].belongs_to_requested_month);
        assert_eq!(grid.cells()[0].day_number, 1);
    }

    #[test]
    fn test_january_takes_leading_days_from_december() {
        // January 2025 starts on a Wednesday
        let grid = build_month_grid(month(2025, 0), &ScheduleMap::new());
        let leading: Vec<u32> = grid
            .cells()
            .iter()
            .take_while(|c| !c.belongs_to_requested_month)
            .map(|c| c.day_number)
            .collect();
        assert_eq!(leading, vec![29, 30, 31]);
    }

    #[test]
    fn test_march_leap_year_leading_days() {
        // March 2024 starts on a Friday; February 2024 has 29 days
        let grid = build_month_grid(month(2024, 2), &ScheduleMap::new());
        assert_eq!(grid.cells()[0].day_number, 25);
        assert_eq!(grid.cells()[4].day_number, 29);
        assert_eq!(grid.cells()[5].day_number, 1);
        assert!(grid.cells()[5].belongs_to_requested_month);
    }

    #[test]
    fn test_february_in_month_run() {
        let leap = build_month_grid(month(2024, 1), &ScheduleMap::new());
        let days: Vec<u32> = leap.in_month_cells().map(|c| c.day_number).collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());

        let common = build_month_grid(month(2023, 1), &ScheduleMap::new());
        assert_eq!(common.in_month_cells().count(), 28);
    }

    #[test]
    fn test_schedule_attached_to_matching_day_only() {
        let grid = build_month_grid(month(2025, 3), &april_schedule());
        let scheduled: Vec<&DayCell> = grid.scheduled_days().collect();

        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].date_key, Some("2025-04-20".parse().unwrap()));
        assert_eq!(scheduled[0].dose_count, Some(DoseCount::new(2, 1, 2)));
        assert_eq!(scheduled[0].day_number, 20);
    }

    #[test]
    fn test_only_in_month_cells_have_keys_or_doses() {
        let mut schedule = april_schedule();
        // Visible as a trailing cell of April, but belongs to May
        schedule.insert("2025-05-01".parse().unwrap(), DoseCount::new(1, 1, 1));

        let grid = build_month_grid(month(2025, 3), &schedule);
        for cell in grid.cells() {
            if !cell.belongs_to_requested_month {
                assert!(cell.date_key.is_none());
                assert!(cell.dose_count.is_none());
            } else {
                assert!(cell.date_key.is_some());
            }
        }
        assert_eq!(grid.scheduled_days().count(), 1);
    }

    #[test]
    fn test_build_is_idempotent_and_leaves_schedule_untouched() {
        let schedule = april_schedule();
        let before = schedule.clone();
        let first = build_month_grid(month(2025, 3), &schedule);
        let second = build_month_grid(month(2025, 3), &schedule);
        assert_eq!(first, second);
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_in_month_keys_are_consecutive_dates() {
        let grid = build_month_grid(month(2024, 11), &ScheduleMap::new());
        let keys: Vec<DateKey> = grid.in_month_cells().filter_map(|c| c.date_key).collect();
        assert_eq!(keys.first().unwrap().to_string(), "2024-12-01");
        assert_eq!(keys.last().unwrap().to_string(), "2024-12-31");
    }
}
