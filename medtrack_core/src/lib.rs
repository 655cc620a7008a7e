#![forbid(unsafe_code)]

//! Core domain model and logic for the Medtrack medication schedule.
//!
//! This crate provides:
//! - Domain types (dose counts, date keys, calendar months)
//! - Calendar grid construction
//! - Chronological schedule indexing
//! - Daily dose checklist and prescription filtering
//! - Sample data, configuration and logging setup

pub mod types;
pub mod error;
pub mod calendar;
pub mod schedule;
pub mod daily;
pub mod prescriptions;
pub mod sample;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use calendar::{build_month_grid, MonthGrid};
pub use schedule::{index_schedule, load_schedule};
pub use daily::{DailyChecklist, Dose};
pub use prescriptions::{filter_prescriptions, Prescription, PrescriptionStatus, StatusFilter};
pub use config::{Config, ViewMode};
