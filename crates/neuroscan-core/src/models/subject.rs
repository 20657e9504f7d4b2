use std::fmt;

use crate::error::CoreError;

/// The person an assessment is about, and whether a caregiver is answering
/// on their behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub caregiver: bool,
}

impl Subject {
    /// The name is kept exactly as entered; a blank name is rejected.
    pub fn new(name: impl Into<String>, caregiver: bool) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptySubjectName);
        }
        Ok(Self { name, caregiver })
    }
}

/// Renders as it appears on the `User:` line of a log entry.
impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.caregiver {
            write!(f, "{} (Caregiver)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
