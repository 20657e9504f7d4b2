use super::subject::Subject;
use super::tier::RiskTier;

/// The outcome of one completed assessment run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub subject: Subject,
    pub score: u32,
    pub max_score: u32,
    pub tier: RiskTier,
    pub recommendation: String,
    /// Set when the first question (recent memory) was answered "Often".
    /// Advisory only; it never feeds into the score or the tier.
    pub frequent_memory_issue: bool,
    pub completed_at: jiff::Zoned,
}
