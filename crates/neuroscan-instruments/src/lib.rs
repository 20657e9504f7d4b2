//! neuroscan-instruments
//!
//! Screening instrument definitions and the assessment engine. Pure logic,
//! no file or console I/O. Defines the question battery, the response scale,
//! the scoring rule and the risk-tier classification.

pub mod engine;
pub mod error;
pub mod instruments;
pub mod scoring;

use scoring::{Classification, Question, ResponseScale};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Human-readable name (e.g., "NeuroScan").
    fn name(&self) -> &str;

    /// The ordered questions, numbered from 1.
    fn questions(&self) -> &[Question];

    /// The scale every question is answered on.
    fn scale(&self) -> &ResponseScale;

    /// Map a total score to a risk tier and recommendation.
    fn classify(&self, total_score: u32) -> Classification;

    /// The question whose top-of-scale answer flags frequent memory issues,
    /// if this instrument has one.
    fn memory_flag_question(&self) -> Option<usize> {
        None
    }

    /// Highest total score this instrument can produce.
    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * u32::from(self.scale().max)
    }

    /// Look up a question by its 1-based number.
    fn question(&self, number: usize) -> Option<&Question> {
        number
            .checked_sub(1)
            .and_then(|index| self.questions().get(index))
    }
}
