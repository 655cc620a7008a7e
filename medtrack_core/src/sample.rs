//! Built-in sample data.
//!
//! Used when no schedule file is configured, and by the `today` and
//! `prescriptions` views which have no other source yet.

use crate::daily::{DailyChecklist, Dose};
use crate::prescriptions::{DoseTimes, PrescribedMedication, Prescription, PrescriptionStatus};
use crate::types::{DateKey, DoseCount, ScheduleMap};
use once_cell::sync::Lazy;

/// Cached sample schedule - built once and reused
static SAMPLE_SCHEDULE: Lazy<ScheduleMap> = Lazy::new(build_sample_schedule_internal);

/// Cached sample prescriptions
static SAMPLE_PRESCRIPTIONS: Lazy<Vec<Prescription>> = Lazy::new(build_sample_prescriptions_internal);

/// Get a reference to the cached sample schedule
pub fn sample_schedule() -> &'static ScheduleMap {
    &SAMPLE_SCHEDULE
}

/// Get a reference to the cached sample prescriptions
pub fn sample_prescriptions() -> &'static [Prescription] {
    &SAMPLE_PRESCRIPTIONS
}

/// An owned copy of today's sample checklist, all doses untaken
pub fn sample_checklist() -> DailyChecklist {
    DailyChecklist {
        morning: vec![
            Dose::new("Aspirin", "1 tablet"),
            Dose::new("Vitamin C", "2 tablets"),
        ],
        afternoon: vec![Dose::new("Ibuprofen", "1 tablet")],
        night: vec![
            Dose::new("Calcium", "1 tablet"),
            Dose::new("Magnesium", "1 capsule"),
        ],
    }
}

fn date(year: i32, month: u32, day: u32) -> DateKey {
    match DateKey::new(year, month, day) {
        Ok(key) => key,
        Err(e) => unreachable!("sample date is valid: {}", e),
    }
}

fn build_sample_schedule_internal() -> ScheduleMap {
    let mut schedule = ScheduleMap::new();
    schedule.insert(date(2025, 4, 20), DoseCount::new(2, 1, 2));
    schedule.insert(date(2025, 4, 21), DoseCount::new(1, 0, 1));
    schedule.insert(date(2025, 4, 22), DoseCount::new(2, 1, 0));
    schedule
}

fn medication(
    name: &str,
    dosage: &str,
    (morning, afternoon, night): (bool, bool, bool),
    period: &str,
) -> PrescribedMedication {
    PrescribedMedication {
        name: name.into(),
        dosage: dosage.into(),
        schedule: DoseTimes {
            morning,
            afternoon,
            night,
        },
        period: period.into(),
    }
}

fn build_sample_prescriptions_internal() -> Vec<Prescription> {
    vec![
        Prescription {
            date: date(2025, 4, 20),
            doctor_name: "Dr. Smith".into(),
            status: PrescriptionStatus::Active,
            medications: vec![
                medication("Amoxicillin", "500mg", (true, false, true), "7 days"),
                medication("Ibuprofen", "400mg", (true, true, true), "5 days"),
            ],
        },
        Prescription {
            date: date(2025, 4, 19),
            doctor_name: "Dr. Williams".into(),
            status: PrescriptionStatus::Active,
            medications: vec![
                medication("Metformin", "850mg", (true, false, true), "30 days"),
                medication("Vitamin D3", "2000 IU", (true, false, false), "90 days"),
            ],
        },
        Prescription {
            date: date(2025, 4, 15),
            doctor_name: "Dr. Johnson".into(),
            status: PrescriptionStatus::Completed,
            medications: vec![medication("Cetirizine", "10mg", (true, false, false), "14 days")],
        },
        Prescription {
            date: date(2025, 4, 10),
            doctor_name: "Dr. Anderson".into(),
            status: PrescriptionStatus::Expired,
            medications: vec![
                medication("Omeprazole", "20mg", (true, false, false), "30 days"),
                medication("Ferrous Sulfate", "325mg", (false, true, false), "60 days"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prescriptions::{filter_prescriptions, StatusFilter};
    use crate::schedule::index_schedule;

    #[test]
    fn test_sample_schedule_contents() {
        let schedule = sample_schedule();
        assert_eq!(schedule.len(), 3);
        assert_eq!(
            schedule[&"2025-04-21".parse::<DateKey>().unwrap()],
            DoseCount::new(1, 0, 1)
        );

        let first = &index_schedule(schedule)[0];
        assert_eq!(first.date_key.to_string(), "2025-04-20");
    }

    #[test]
    fn test_sample_checklist_starts_untaken() {
        let checklist = sample_checklist();
        assert_eq!(checklist.remaining(), 5);
        assert_eq!(checklist.morning[0].name, "Aspirin");
    }

    #[test]
    fn test_sample_prescription_statuses() {
        let all = sample_prescriptions();
        assert_eq!(all.len(), 4);
        let active = filter_prescriptions(all, StatusFilter::Status(PrescriptionStatus::Active));
        assert_eq!(active.len(), 2);
        let expired = filter_prescriptions(all, StatusFilter::Status(PrescriptionStatus::Expired));
        assert_eq!(expired[0].doctor_name, "Dr. Anderson");
    }
}
