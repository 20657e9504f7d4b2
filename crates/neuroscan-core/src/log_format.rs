//! Log file naming and record layout.
//!
//! Pure string functions. These define the canonical text written to the
//! assessment log and the reminder log; the storage layer only appends
//! what is produced here.

use crate::models::{AssessmentResult, Reminder};

pub const RESULTS_LOG: &str = "NeuroScan_Results.txt";

pub const REMINDERS_LOG: &str = "NeuroScan_Reminders.txt";

/// Line that opens every assessment log entry.
pub const ENTRY_DELIMITER: &str = "------------------------------------------";

/// ctime-style, e.g. `Mon Oct 19 09:30:00 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn timestamp(at: &jiff::Zoned) -> String {
    at.strftime(TIMESTAMP_FORMAT).to_string()
}

/// Render one complete assessment log entry, including the trailing newline.
///
/// The caregiver note, when present, is part of the same entry so the whole
/// record can be persisted with a single append.
pub fn assessment_entry(result: &AssessmentResult, caregiver_note: Option<&str>) -> String {
    let mut entry = format!(
        "{ENTRY_DELIMITER}\n\
         User: {}\n\
         Date: {}\n\
         Score: {} / {}\n\
         Risk Level: {}\n\
         Recommendation: {}\n",
        result.subject,
        timestamp(&result.completed_at),
        result.score,
        result.max_score,
        result.tier,
        result.recommendation,
    );
    if let Some(note) = caregiver_note {
        entry.push_str(&format!("Caregiver Note: {}\n", single_line(note)));
    }
    entry
}

pub fn reminder_line(reminder: &Reminder) -> String {
    format!(
        "{} should retake NeuroScan on: {}\n",
        reminder.subject_name,
        timestamp(&reminder.due)
    )
}

// A note is one line of the entry; embedded line breaks would read as new fields.
fn single_line(note: &str) -> String {
    note.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
