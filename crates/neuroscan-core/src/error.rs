use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("reminder date out of range: {0}")]
    ReminderDate(#[from] jiff::Error),

    #[error("subject name must not be empty")]
    EmptySubjectName,
}
