//! Driving a session from canned answers.
//!
//! [`ScriptedRespondent`] stands in for an interactive frontend: it walks
//! a whole session from pre-recorded answers and returns the submission.
//! Useful for testing survey flows without interaction, and for replaying
//! stored responses through the validation path.
//!
//! # Example
//!
//! ```rust,ignore
//! let submission = ScriptedRespondent::new()
//!     .with_answer(1, Answer::Choice(11))
//!     .with_answer(3, Answer::Rating(4))
//!     .with_comment("all good")
//!     .run(&survey, &respondent)?;
//! ```

use std::collections::BTreeMap;

use campus_survey_types::{Answer, QuestionId, Respondent, Submission, Survey};

use crate::session::{ResponseSession, SessionError, StepOutcome};

/// Error type for scripted runs.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedError {
    /// A required question was left unanswered by the script.
    #[error("required question {0} is unanswered")]
    Unanswered(QuestionId),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Pre-recorded answers that can run a whole session without interaction.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    answers: BTreeMap<QuestionId, Answer>,
    comment: Option<String>,
}

impl ScriptedRespondent {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an answer for a question.
    pub fn with_answer(mut self, question_id: QuestionId, answer: impl Into<Answer>) -> Self {
        self.answers.insert(question_id, answer.into());
        self
    }

    /// Script the free-text comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Walk `survey` start to finish as `respondent` and submit.
    ///
    /// Questions without a scripted answer are skipped; if one of them is
    /// required, the run stops with [`ScriptedError::Unanswered`].
    pub fn run(
        &self,
        survey: &Survey,
        respondent: &Respondent,
    ) -> Result<Submission, ScriptedError> {
        let mut session = ResponseSession::start(survey, respondent)?;
        if let Some(comment) = &self.comment {
            session.set_comment(comment.clone())?;
        }
        loop {
            let Some(question_id) = session.current_question().map(|question| question.id())
            else {
                break;
            };
            if let Some(answer) = self.answers.get(&question_id) {
                session.answer(question_id, answer.clone())?;
            }
            if session.advance()? == StepOutcome::RequiredUnanswered {
                return Err(ScriptedError::Unanswered(question_id));
            }
        }
        Ok(session.submit()?)
    }
}

#[cfg(test)]
mod tests {
    use campus_survey_types::{AnswerOption, Gender, Question, TargetAudience};

    use super::*;

    fn survey() -> Survey {
        Survey::new(
            3,
            "Tutoring",
            vec![
                Question::single_answer(
                    1,
                    1,
                    "Attended a tutorial?",
                    vec![
                        AnswerOption::new(1, 1, "Yes"),
                        AnswerOption::new(2, 2, "No"),
                    ],
                )
                .required(),
                Question::open_text(2, 2, "Comments?"),
            ],
        )
        .unwrap()
    }

    fn respondent() -> Respondent {
        Respondent::new(9, Gender::Male, 1, 4)
    }

    #[test]
    fn runs_a_full_session() {
        let submission = ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(1))
            .with_answer(2, "could be longer")
            .with_comment("thanks")
            .run(&survey(), &respondent())
            .unwrap();

        assert_eq!(submission.answer(1), Some(&Answer::Choice(1)));
        assert_eq!(
            submission.answer(2),
            Some(&Answer::Text("could be longer".into()))
        );
        assert_eq!(submission.comment(), Some("thanks"));
    }

    #[test]
    fn optional_questions_may_stay_unanswered() {
        let submission = ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(2))
            .run(&survey(), &respondent())
            .unwrap();
        assert_eq!(submission.answer(2), None);
    }

    #[test]
    fn stops_on_unanswered_required_question() {
        let result = ScriptedRespondent::new()
            .with_answer(2, "only the optional one")
            .run(&survey(), &respondent());
        assert!(matches!(result, Err(ScriptedError::Unanswered(1))));
    }

    #[test]
    fn respects_the_target_audience() {
        let survey = survey().with_audience(TargetAudience::everyone().for_gender(Gender::Female));
        let result = ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(1))
            .run(&survey, &respondent());
        assert!(matches!(
            result,
            Err(ScriptedError::Session(SessionError::NotEligible))
        ));
    }
}
