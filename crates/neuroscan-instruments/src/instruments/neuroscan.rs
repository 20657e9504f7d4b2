use std::sync::LazyLock;

use crate::Instrument;
use crate::scoring::{self, Classification, FREQUENCY_SCALE, Question, ResponseScale};

/// The question answered "Often" by people with frequent memory issues.
pub const RECENT_MEMORY_QUESTION: usize = 1;

/// NeuroScan: a ten-item screen for early cognitive and motor symptoms
/// associated with Alzheimer's disease, Parkinson's disease and mild cognitive
/// impairment. Each item is rated 0–2 (Never / Sometimes / Often). Total 0–20.
///
/// Educational screening only; not a diagnostic instrument.
pub struct NeuroScan;

impl Instrument for NeuroScan {
    fn name(&self) -> &str {
        "NeuroScan"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let prompts = [
                // Cognitive
                "Do you often forget recent conversations, appointments, or events?",
                "Do you have trouble finding the right words during conversation?",
                "Do you get lost or confused in familiar places?",
                "Do you have trouble concentrating or following conversations with multiple people?",
                "Do you frequently misplace things and have trouble retracing your steps?",
                // Motor
                "Have you noticed stiffness or rigidity in your arms, legs, or neck?",
                "Do you walk more slowly or with a shuffling gait?",
                "Do you feel off-balance or experience frequent stumbling or unsteadiness?",
                "Have you noticed changes in your handwriting, such as smaller or shakier letters?",
                "Do you experience tremors or involuntary shaking when resting?",
            ];

            prompts
                .iter()
                .enumerate()
                .map(|(index, prompt)| Question {
                    number: index + 1,
                    prompt: prompt.to_string(),
                })
                .collect()
        });
        &QUESTIONS
    }

    fn scale(&self) -> &ResponseScale {
        &FREQUENCY_SCALE
    }

    fn classify(&self, total_score: u32) -> Classification {
        scoring::classify(total_score)
    }

    fn memory_flag_question(&self) -> Option<usize> {
        Some(RECENT_MEMORY_QUESTION)
    }
}
