use neuroscan_core::models::RiskTier;

use crate::error::InstrumentError;

/// One scored prompt. `number` is 1-based and matches the prompt order.
#[derive(Debug, Clone)]
pub struct Question {
    pub number: usize,
    pub prompt: String,
}

/// The frequency scale every question is answered on.
#[derive(Debug, Clone, Copy)]
pub struct ResponseScale {
    pub min: u8,
    pub max: u8,
    pub labels: &'static [&'static str],
}

/// 0 = Never, 1 = Sometimes, 2 = Often.
pub const FREQUENCY_SCALE: ResponseScale = ResponseScale {
    min: 0,
    max: 2,
    labels: &["Never", "Sometimes", "Often"],
};

impl ResponseScale {
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Range-check a numeric answer to `question`.
    pub fn check(&self, question: usize, value: i64) -> Result<Response, InstrumentError> {
        if !self.contains(value) {
            return Err(InstrumentError::InvalidResponse {
                question,
                input: value.to_string(),
            });
        }
        // In range, so it fits in a u8.
        Ok(Response(value as u8))
    }

    /// Parse raw console input for `question`. Non-numeric input is rejected
    /// the same way an out-of-range number is.
    pub fn parse(&self, question: usize, input: &str) -> Result<Response, InstrumentError> {
        let trimmed = input.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InstrumentError::InvalidResponse {
                question,
                input: trimmed.to_string(),
            })?;
        self.check(question, value)
    }

    /// `0 = Never, 1 = Sometimes, 2 = Often`
    pub fn legend(&self) -> String {
        self.labels
            .iter()
            .enumerate()
            .map(|(value, label)| format!("{} = {label}", usize::from(self.min) + value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A range-checked answer. Only obtainable through [`ResponseScale::check`]
/// or [`ResponseScale::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response(u8);

impl Response {
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Risk tier plus the advice that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: RiskTier,
    pub recommendation: &'static str,
}

pub const HIGH_THRESHOLD: u32 = 16;

pub const MODERATE_THRESHOLD: u32 = 9;

const HIGH_RECOMMENDATION: &str = "Your responses suggest significant symptoms. Please consult a healthcare professional.\n\
>> In the meantime: Keep a symptom journal, avoid multitasking, and ensure proper sleep.\n\
\n\
Support Resources:\n\
- Alzheimer's Association: 1-800-272-3900 | https://www.alz.org/\n\
- Parkinson\u{2019}s Foundation: https://www.parkinson.org";

const MODERATE_RECOMMENDATION: &str = "Some symptoms are present. A screening may be beneficial.\n\
>> Helpful habits: Brain games, exercise, and a Mediterranean diet.\n\
\n\
Support Resources:\n\
- Cleveland Clinic Brain Health: https://my.clevelandclinic.org\n\
- AARP Brain Health: https://www.aarp.org/health/brain-health/";

const LOW_RECOMMENDATION: &str = "No significant symptoms detected.\n\
>> Tip: Maintain a healthy lifestyle, engage socially, and stay mentally active.\n\
\n\
Brain Health Tips:\n\
- Try puzzles and memory games weekly\n\
- Stay physically active and socially engaged";

/// Map a total score to its tier. Thresholds are inclusive lower bounds,
/// checked from the highest tier down.
pub fn classify(total_score: u32) -> Classification {
    if total_score >= HIGH_THRESHOLD {
        Classification {
            tier: RiskTier::High,
            recommendation: HIGH_RECOMMENDATION,
        }
    } else if total_score >= MODERATE_THRESHOLD {
        Classification {
            tier: RiskTier::Moderate,
            recommendation: MODERATE_RECOMMENDATION,
        }
    } else {
        Classification {
            tier: RiskTier::Low,
            recommendation: LOW_RECOMMENDATION,
        }
    }
}
