use jiff::ToSpan;

use crate::error::CoreError;

/// The user's answer to "retake in 1 week (1), 2 weeks (2), or no reminder (0)?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderChoice {
    NoReminder,
    OneWeek,
    TwoWeeks,
}

impl ReminderChoice {
    /// Parse the menu answer. Anything other than `1` or `2` means no reminder.
    pub fn from_menu(input: &str) -> Self {
        match input.trim() {
            "1" => Self::OneWeek,
            "2" => Self::TwoWeeks,
            _ => Self::NoReminder,
        }
    }

    /// Calendar days until the retake, or `None` when no reminder was asked for.
    pub fn days(self) -> Option<i64> {
        match self {
            Self::NoReminder => None,
            Self::OneWeek => Some(7),
            Self::TwoWeeks => Some(14),
        }
    }
}

/// A suggested retake date for a named subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub subject_name: String,
    pub due: jiff::Zoned,
}

impl Reminder {
    /// Schedule a retake relative to `from`. Days are added in calendar time,
    /// so the wall-clock time of day is kept across DST transitions.
    pub fn schedule(
        subject_name: &str,
        from: &jiff::Zoned,
        choice: ReminderChoice,
    ) -> Result<Option<Self>, CoreError> {
        let Some(days) = choice.days() else {
            return Ok(None);
        };
        let due = from.checked_add(days.days())?;
        Ok(Some(Self {
            subject_name: subject_name.to_string(),
            due,
        }))
    }
}
