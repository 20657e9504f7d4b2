//! The assessment state machine.
//!
//! One [`Assessment`] covers exactly one run. It moves linearly through
//! `AwaitingResponse(1..=N)` and becomes `Complete` once the last answer is
//! recorded; [`Assessment::finish`] then scores and classifies it into an
//! immutable [`AssessmentResult`]. There is no way back and no way to skip.

use neuroscan_core::models::{AssessmentResult, Subject};

use crate::Instrument;
use crate::error::InstrumentError;
use crate::scoring::{Question, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentState {
    /// Waiting for the answer to this 1-based question number.
    AwaitingResponse(usize),
    Complete,
}

pub struct Assessment<'a> {
    instrument: &'a dyn Instrument,
    responses: Vec<Response>,
}

impl<'a> Assessment<'a> {
    pub fn new(instrument: &'a dyn Instrument) -> Self {
        Self {
            instrument,
            responses: Vec::with_capacity(instrument.questions().len()),
        }
    }

    pub fn instrument(&self) -> &'a dyn Instrument {
        self.instrument
    }

    pub fn state(&self) -> AssessmentState {
        if self.responses.len() == self.instrument.questions().len() {
            AssessmentState::Complete
        } else {
            AssessmentState::AwaitingResponse(self.responses.len() + 1)
        }
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.state() {
            AssessmentState::AwaitingResponse(number) => self.instrument.question(number),
            AssessmentState::Complete => None,
        }
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// Record the answer to `question`. The value is range-checked against the
    /// instrument's scale; on any error nothing is stored and the same
    /// question stays current.
    pub fn record_response(&mut self, question: usize, value: i64) -> Result<(), InstrumentError> {
        let expected = self.expect_question(question)?;
        let response = self.instrument.scale().check(expected, value)?;
        self.responses.push(response);
        Ok(())
    }

    /// Parse raw console input as the answer to the current question.
    /// Returns the number of the question that was answered.
    pub fn answer_current(&mut self, input: &str) -> Result<usize, InstrumentError> {
        let question = match self.state() {
            AssessmentState::AwaitingResponse(number) => number,
            AssessmentState::Complete => {
                return Err(InstrumentError::AlreadyComplete {
                    got: self.responses.len() + 1,
                });
            }
        };
        let value = self.instrument.scale().parse(question, input)?.value();
        self.record_response(question, i64::from(value))?;
        Ok(question)
    }

    /// Sum of all responses. Fails unless every question has been answered;
    /// a partial set is never scored.
    pub fn score(&self) -> Result<u32, InstrumentError> {
        let expected = self.instrument.questions().len();
        if self.responses.len() != expected {
            return Err(InstrumentError::IncompleteAssessment {
                answered: self.responses.len(),
                expected,
            });
        }
        Ok(self.responses.iter().map(|r| u32::from(r.value())).sum())
    }

    /// True iff the instrument's memory-flag question was answered at the
    /// top of the scale ("Often"). Advisory only.
    pub fn has_frequent_memory_flag(&self) -> bool {
        self.instrument
            .memory_flag_question()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.responses.get(index))
            .is_some_and(|r| r.value() == self.instrument.scale().max)
    }

    /// Score and classify a complete run.
    pub fn finish(
        self,
        subject: Subject,
        completed_at: jiff::Zoned,
    ) -> Result<AssessmentResult, InstrumentError> {
        let score = self.score()?;
        let classification = self.instrument.classify(score);
        Ok(AssessmentResult {
            subject,
            score,
            max_score: self.instrument.max_score(),
            tier: classification.tier,
            recommendation: classification.recommendation.to_string(),
            frequent_memory_issue: self.has_frequent_memory_flag(),
            completed_at,
        })
    }

    fn expect_question(&self, got: usize) -> Result<usize, InstrumentError> {
        match self.state() {
            AssessmentState::AwaitingResponse(expected) if expected == got => Ok(expected),
            AssessmentState::AwaitingResponse(expected) => {
                Err(InstrumentError::OutOfSequence { expected, got })
            }
            AssessmentState::Complete => Err(InstrumentError::AlreadyComplete { got }),
        }
    }
}
