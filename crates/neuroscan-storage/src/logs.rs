use std::path::{Path, PathBuf};

use neuroscan_core::log_format;
use neuroscan_core::models::{AssessmentResult, Reminder};
use tracing::info;

use crate::append::{self, LogLines};
use crate::error::StorageError;

/// The assessment log: one delimited entry per completed run, oldest first.
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, with the caregiver note if any, as a single write.
    pub fn append(
        &self,
        result: &AssessmentResult,
        caregiver_note: Option<&str>,
    ) -> Result<(), StorageError> {
        let entry = log_format::assessment_entry(result, caregiver_note);
        append::append_text(&self.path, &entry)?;
        info!(
            subject = %result.subject.name,
            score = result.score,
            tier = ?result.tier,
            path = %self.path.display(),
            "assessment saved"
        );
        Ok(())
    }

    /// Stored lines in file order. `Ok(None)` means there are no previous
    /// results. Each call rescans the file from the start.
    pub fn view(&self) -> Result<Option<LogLines>, StorageError> {
        append::read_lines(&self.path)
    }
}

/// The reminder log: one line per scheduled retake.
#[derive(Debug, Clone)]
pub struct ReminderLog {
    path: PathBuf,
}

impl ReminderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, reminder: &Reminder) -> Result<(), StorageError> {
        append::append_text(&self.path, &log_format::reminder_line(reminder))?;
        info!(
            subject = %reminder.subject_name,
            due = %reminder.due,
            path = %self.path.display(),
            "reminder saved"
        );
        Ok(())
    }
}
