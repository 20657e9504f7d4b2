use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("invalid response '{input}' to question {question}: expected 0, 1, or 2")]
    InvalidResponse { question: usize, input: String },

    #[error("assessment incomplete: {answered} of {expected} questions answered")]
    IncompleteAssessment { answered: usize, expected: usize },

    #[error("question {got} answered out of sequence (awaiting question {expected})")]
    OutOfSequence { expected: usize, got: usize },

    #[error("assessment already complete; question {got} does not exist")]
    AlreadyComplete { got: usize },
}
