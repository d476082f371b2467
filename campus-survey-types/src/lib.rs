//! Core types for the campus-survey engine.
//!
//! This crate provides the foundational survey model:
//! - `Survey`, `Question` and `QuestionKind` - the survey structure
//! - `Answer` and `Submission` - respondent data
//! - `Respondent` and `TargetAudience` - eligibility
//!
//! It is pure data plus validation predicates. The response session and
//! the statistics aggregator live in the `campus-survey` crate.

mod answer;
pub use answer::Answer;

mod audience;
pub use audience::TargetAudience;

mod error;
pub use error::ModelError;

mod question;
pub use question::{
    AnswerOption, ChoiceQuestion, OptionId, Question, QuestionId, QuestionKind, RATING_MAX,
    RATING_MIN,
};

mod respondent;
pub use respondent::{DepartmentId, Gender, Respondent, RespondentId};

mod submission;
pub use submission::{AnswerMap, Submission};

mod survey;
pub use survey::{Survey, SurveyId};
