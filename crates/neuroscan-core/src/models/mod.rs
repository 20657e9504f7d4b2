pub mod assessment;
pub mod reminder;
pub mod subject;
pub mod tier;

pub use assessment::AssessmentResult;
pub use reminder::{Reminder, ReminderChoice};
pub use subject::Subject;
pub use tier::RiskTier;
