//! # campus-survey
//!
//! The response and analytics engine behind a university survey platform.
//! Presentation, transport and persistence live elsewhere; this crate is
//! the part with actual rules in it:
//!
//! - the survey model (re-exported from `campus-survey-types`): question
//!   kinds, answers, eligibility targeting
//! - [`ResponseSession`] - the per-respondent walk through a survey's
//!   questions, with required-answer gating and progress tracking
//! - [`aggregate`] - the pure function turning a set of submissions into
//!   per-question statistical summaries
//! - [`ScriptedRespondent`] - a canned-answer driver for tests and replay
//!
//! ## Example
//!
//! ```
//! use campus_survey::{
//!     aggregate, Answer, AnswerOption, Gender, Question, Respondent, ResponseSession,
//!     StepOutcome, Survey,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let survey = Survey::new(
//!     1,
//!     "Library opening hours",
//!     vec![Question::single_answer(
//!         10,
//!         1,
//!         "Preferred closing time?",
//!         vec![
//!             AnswerOption::new(1, 1, "20:00"),
//!             AnswerOption::new(2, 2, "22:00"),
//!         ],
//!     )
//!     .required()],
//! )?
//! .with_required_participants(2);
//!
//! let student = Respondent::new(7, Gender::Other, 1, 3);
//! let mut session = ResponseSession::start(&survey, &student)?;
//! session.answer(10, Answer::Choice(2))?;
//! assert_eq!(session.advance()?, StepOutcome::ReadyToSubmit);
//! let submission = session.submit()?;
//!
//! let stats = aggregate(&survey, &[submission])?;
//! assert_eq!(stats.questions[0].total_answers, 1);
//! assert_eq!(stats.completion_rate, 50);
//! # Ok(())
//! # }
//! ```

// Re-export all types from campus-survey-types
pub use campus_survey_types::*;

mod session;
pub use session::{ResponseSession, SessionError, SessionState, StepOutcome};

mod scripted;
pub use scripted::{ScriptedError, ScriptedRespondent};

mod stats;
pub use stats::{
    AnswerSummary, OptionCount, QuestionStatistics, RatingCount, SurveyInfo, SurveyStatistics,
    aggregate,
};
