//! The per-respondent response collection workflow.
//!
//! A [`ResponseSession`] walks an ordered question list, collects one
//! answer per question, enforces `required` constraints, and produces the
//! final [`Submission`]. It is a plain value object - no rendering, no
//! I/O - and serializes as a whole so an external session store can
//! persist and restore it.

use std::collections::BTreeMap;

use campus_survey_types::{
    Answer, AnswerMap, ModelError, Question, QuestionId, Respondent, RespondentId, Submission,
    Survey, SurveyId,
};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Lifecycle of a response session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The respondent is walking the question list.
    InProgress,

    /// The last question's required check passed; waiting for `submit`.
    ReadyToSubmit,

    /// A submission was produced. Terminal.
    Submitted,

    /// The session was discarded without a submission. Terminal.
    Abandoned,
}

impl SessionState {
    /// Whether the session can still change.
    pub fn is_open(self) -> bool {
        matches!(self, Self::InProgress | Self::ReadyToSubmit)
    }
}

/// Error type for session operations.
///
/// An unanswered required question is not among these: it is reported as
/// [`StepOutcome::RequiredUnanswered`] so the caller can block forward
/// navigation and let the respondent retry.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("respondent is outside the survey's target audience")]
    NotEligible,

    #[error("survey has no questions")]
    EmptySurvey,

    #[error("session is {0:?} and accepts no further input")]
    Closed(SessionState),

    #[error("cannot submit while {0:?}")]
    NotReady(SessionState),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Outcome of a forward navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the next question.
    Advanced,

    /// Walked past the last question; the session can now submit.
    ReadyToSubmit,

    /// The current question is required and unanswered; the index did not
    /// move.
    RequiredUnanswered,
}

/// A stateful walk over one survey for one respondent.
///
/// Owned exclusively by that respondent's interaction; concurrent
/// respondents each hold their own session and share nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSession {
    survey_id: SurveyId,

    respondent_id: RespondentId,

    /// The survey's questions in presentation order.
    questions: Vec<Question>,

    /// Answers entered so far, keyed by question id. Navigation never
    /// touches this map.
    answers: AnswerMap,

    /// Index into `questions`; equal to their number once all are passed.
    current: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    state: SessionState,
}

impl ResponseSession {
    /// Start a session for `respondent` over `survey`.
    ///
    /// Refuses respondents outside the survey's target audience, and
    /// surveys without questions.
    pub fn start(survey: &Survey, respondent: &Respondent) -> Result<Self, SessionError> {
        if !survey.audience().admits(respondent) {
            return Err(SessionError::NotEligible);
        }
        if survey.is_empty() {
            return Err(SessionError::EmptySurvey);
        }
        Ok(Self {
            survey_id: survey.id(),
            respondent_id: respondent.id(),
            questions: survey.questions().to_vec(),
            answers: BTreeMap::new(),
            current: 0,
            comment: None,
            state: SessionState::InProgress,
        })
    }

    /// Get the session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the survey being answered.
    pub fn survey_id(&self) -> SurveyId {
        self.survey_id
    }

    /// Get the respondent answering it.
    pub fn respondent_id(&self) -> RespondentId {
        self.respondent_id
    }

    /// The question currently presented, or `None` once the walk is past
    /// the last one.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state == SessionState::InProgress {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// All answers stored so far, keyed by question id.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Total number of questions in the walk.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions with a non-empty stored answer.
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|answer| !answer.is_empty()).count()
    }

    /// Store or overwrite the answer for `question_id` without moving.
    ///
    /// Allowed while `InProgress`; the respondent may go back and change
    /// any earlier answer, which never invalidates later ones. The answer
    /// is validated against the question (shape, option ownership, rating
    /// bounds) and stored normalized.
    pub fn answer(&mut self, question_id: QuestionId, answer: Answer) -> Result<(), SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::Closed(self.state));
        }
        let question = self
            .questions
            .iter()
            .find(|question| question.id() == question_id)
            .ok_or(ModelError::UnknownQuestion(question_id))?;
        question.check_answer(&answer)?;
        self.answers.insert(question_id, answer.normalized());
        Ok(())
    }

    /// Move to the next question, or to `ReadyToSubmit` past the last one.
    ///
    /// Refused - index unchanged - while the current question is required
    /// and unanswered.
    pub fn advance(&mut self) -> Result<StepOutcome, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::Closed(self.state));
        }
        let question = &self.questions[self.current];
        if !question.is_answered(self.answers.get(&question.id())) {
            return Ok(StepOutcome::RequiredUnanswered);
        }
        self.current += 1;
        if self.current == self.questions.len() {
            self.state = SessionState::ReadyToSubmit;
            Ok(StepOutcome::ReadyToSubmit)
        } else {
            Ok(StepOutcome::Advanced)
        }
    }

    /// Move back one question, clamped at the first.
    ///
    /// Allowed from `ReadyToSubmit` as well, returning to the last
    /// question. Stored answers are never touched by navigation.
    pub fn back(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress => {
                self.current = self.current.saturating_sub(1);
                Ok(())
            }
            SessionState::ReadyToSubmit => {
                self.state = SessionState::InProgress;
                self.current = self.questions.len() - 1;
                Ok(())
            }
            state => Err(SessionError::Closed(state)),
        }
    }

    /// Walk progress as a rounded percentage.
    ///
    /// Exactly 100 once the session is ready to submit.
    pub fn progress(&self) -> u8 {
        match self.state {
            SessionState::ReadyToSubmit | SessionState::Submitted => 100,
            SessionState::InProgress | SessionState::Abandoned => {
                let position = (self.current + 1).min(self.questions.len());
                (100.0 * position as f64 / self.questions.len() as f64).round() as u8
            }
        }
    }

    /// Attach or replace the free-text comment sent along with the
    /// answers. Blank comments are dropped.
    pub fn set_comment(&mut self, comment: impl Into<String>) -> Result<(), SessionError> {
        if !self.state.is_open() {
            return Err(SessionError::Closed(self.state));
        }
        let comment = comment.into();
        self.comment = if comment.trim().is_empty() {
            None
        } else {
            Some(comment)
        };
        Ok(())
    }

    /// Produce the immutable submission and close the session.
    ///
    /// Allowed only from `ReadyToSubmit`. Empty answers (no options
    /// ticked, blank text) are dropped: an unanswered optional question is
    /// absent from the submission, not null.
    pub fn submit(&mut self) -> Result<Submission, SessionError> {
        if self.state != SessionState::ReadyToSubmit {
            return Err(SessionError::NotReady(self.state));
        }
        let answers: AnswerMap = std::mem::take(&mut self.answers)
            .into_iter()
            .filter(|(_, answer)| !answer.is_empty())
            .collect();
        self.state = SessionState::Submitted;
        debug!(
            "survey {}: respondent {} submitted {} answers",
            self.survey_id,
            self.respondent_id,
            answers.len()
        );
        Ok(Submission::new(
            self.survey_id,
            self.respondent_id,
            answers,
            self.comment.take(),
            Utc::now(),
        ))
    }

    /// Discard the session without producing a submission.
    ///
    /// A no-op on a session that is already closed.
    pub fn abandon(&mut self) {
        if self.state.is_open() {
            self.state = SessionState::Abandoned;
        }
    }
}
