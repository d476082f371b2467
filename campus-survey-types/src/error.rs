use crate::question::{OptionId, QuestionId};

/// Contract breaches in survey construction and answer handling.
///
/// These indicate caller errors, never respondent input problems.
/// Respondent input problems (an unanswered required question) are
/// reported by the session as ordinary return values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate question id {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("duplicate presentation order {0}")]
    DuplicateOrder(u32),

    #[error("question {0} offers fewer than two options")]
    NotEnoughOptions(QuestionId),

    #[error("duplicate option id {option} on question {question}")]
    DuplicateOptionId {
        question: QuestionId,
        option: OptionId,
    },

    #[error("no question with id {0}")]
    UnknownQuestion(QuestionId),

    #[error("option {option} does not belong to question {question}")]
    ForeignOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("answer of type {actual} does not fit question {question} (expected {expected})")]
    AnswerShape {
        question: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("rating {value} on question {question} is outside the 1..=5 scale")]
    RatingOutOfRange { question: QuestionId, value: u8 },
}
