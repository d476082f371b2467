use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Answer,
    question::QuestionId,
    respondent::RespondentId,
    survey::SurveyId,
};

/// Answers keyed by question id.
///
/// An ordered map so repeated serialization of the same submission is
/// byte-stable.
pub type AnswerMap = BTreeMap<QuestionId, Answer>;

/// The immutable result of a completed response session.
///
/// Created once when a session submits; owned by the persistence layer
/// afterwards. Unanswered optional questions have no entry - absence, not
/// null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    survey_id: SurveyId,

    respondent_id: RespondentId,

    answers: AnswerMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Create a submission snapshot.
    pub fn new(
        survey_id: SurveyId,
        respondent_id: RespondentId,
        answers: AnswerMap,
        comment: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            survey_id,
            respondent_id,
            answers,
            comment,
            submitted_at,
        }
    }

    /// Get the survey this submission answers.
    pub fn survey_id(&self) -> SurveyId {
        self.survey_id
    }

    /// Get the respondent who produced it.
    pub fn respondent_id(&self) -> RespondentId {
        self.respondent_id
    }

    /// Get all answers, keyed by question id.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Get the answer for one question, if any.
    pub fn answer(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    /// Get the free-text comment, if one was left.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Get the submission time.
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
