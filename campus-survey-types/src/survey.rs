use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    ModelError, TargetAudience,
    question::{Question, QuestionId, QuestionKind},
};

/// Identifier of a survey.
pub type SurveyId = u32;

/// A survey: metadata, targeting rules, and the ordered question list.
///
/// Construction validates the model invariants, so a `Survey` value always
/// holds questions with unique ids, unique presentation orders, and at
/// least two distinct options on every choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    id: SurveyId,

    title: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    owner_name: String,

    /// Configured participation target; basis of the completion rate.
    #[serde(default)]
    required_participants: u32,

    #[serde(default)]
    audience: TargetAudience,

    questions: Vec<Question>,
}

impl Survey {
    /// Create a survey over the given questions.
    ///
    /// Questions are sorted by presentation order. Fails on duplicate
    /// question ids, duplicate orders, choice questions with fewer than
    /// two options, or duplicate option ids within a question.
    pub fn new(
        id: SurveyId,
        title: impl Into<String>,
        mut questions: Vec<Question>,
    ) -> Result<Self, ModelError> {
        questions.sort_by_key(Question::order);

        let mut ids = HashSet::new();
        let mut orders = HashSet::new();
        for question in &questions {
            if !ids.insert(question.id()) {
                return Err(ModelError::DuplicateQuestionId(question.id()));
            }
            if !orders.insert(question.order()) {
                return Err(ModelError::DuplicateOrder(question.order()));
            }
            if let QuestionKind::MultipleChoice(choice) | QuestionKind::SingleAnswer(choice) =
                question.kind()
            {
                if choice.len() < 2 {
                    return Err(ModelError::NotEnoughOptions(question.id()));
                }
                let mut option_ids = HashSet::new();
                for option in choice.options() {
                    if !option_ids.insert(option.id) {
                        return Err(ModelError::DuplicateOptionId {
                            question: question.id(),
                            option: option.id,
                        });
                    }
                }
            }
        }

        Ok(Self {
            id,
            title: title.into(),
            description: String::new(),
            owner_name: String::new(),
            required_participants: 0,
            audience: TargetAudience::everyone(),
            questions,
        })
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the name of the survey's owner.
    pub fn with_owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = owner_name.into();
        self
    }

    /// Set the participation target used for the completion rate.
    pub fn with_required_participants(mut self, required_participants: u32) -> Self {
        self.required_participants = required_participants;
        self
    }

    /// Set the target audience.
    pub fn with_audience(mut self, audience: TargetAudience) -> Self {
        self.audience = audience;
        self
    }

    /// Get the survey id.
    pub fn id(&self) -> SurveyId {
        self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the owner's name.
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Get the participation target.
    pub fn required_participants(&self) -> u32 {
        self.required_participants
    }

    /// Get the target audience.
    pub fn audience(&self) -> &TargetAudience {
        &self.audience
    }

    /// Get the questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::AnswerOption;

    fn options() -> Vec<AnswerOption> {
        vec![
            AnswerOption::new(1, 1, "Yes"),
            AnswerOption::new(2, 2, "No"),
        ]
    }

    #[test]
    fn questions_are_sorted_by_order() {
        let survey = Survey::new(
            1,
            "Cafeteria",
            vec![
                Question::open_text(10, 2, "Anything else?"),
                Question::single_answer(11, 1, "Happy with the menu?", options()),
            ],
        )
        .unwrap();
        assert_eq!(survey.questions()[0].id(), 11);
        assert_eq!(survey.questions()[1].id(), 10);
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let result = Survey::new(
            1,
            "Cafeteria",
            vec![
                Question::open_text(10, 1, "A?"),
                Question::open_text(10, 2, "B?"),
            ],
        );
        assert!(matches!(result, Err(ModelError::DuplicateQuestionId(10))));
    }

    #[test]
    fn duplicate_orders_are_rejected() {
        let result = Survey::new(
            1,
            "Cafeteria",
            vec![
                Question::open_text(10, 1, "A?"),
                Question::open_text(11, 1, "B?"),
            ],
        );
        assert!(matches!(result, Err(ModelError::DuplicateOrder(1))));
    }

    #[test]
    fn choice_questions_need_two_options() {
        let result = Survey::new(
            1,
            "Cafeteria",
            vec![Question::single_answer(
                10,
                1,
                "Happy?",
                vec![AnswerOption::new(1, 1, "Yes")],
            )],
        );
        assert!(matches!(result, Err(ModelError::NotEnoughOptions(10))));
    }

    #[test]
    fn duplicate_option_ids_are_rejected() {
        let result = Survey::new(
            1,
            "Cafeteria",
            vec![Question::single_answer(
                10,
                1,
                "Happy?",
                vec![
                    AnswerOption::new(1, 1, "Yes"),
                    AnswerOption::new(1, 2, "No"),
                ],
            )],
        );
        assert!(matches!(
            result,
            Err(ModelError::DuplicateOptionId {
                question: 10,
                option: 1
            })
        ));
    }
}
