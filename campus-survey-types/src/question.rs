use serde::{Deserialize, Serialize};

use crate::{Answer, ModelError};

/// Identifier of a question within a survey.
pub type QuestionId = u32;

/// Identifier of an answer option within a question.
pub type OptionId = u32;

/// Lowest selectable rating.
pub const RATING_MIN: u8 = 1;

/// Highest selectable rating.
pub const RATING_MAX: u8 = 5;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique id of this question within its survey.
    id: QuestionId,

    /// The prompt text shown to the respondent.
    text: String,

    /// The kind of question (determines the answer shape).
    kind: QuestionKind,

    /// Whether an answer is mandatory before moving past this question.
    required: bool,

    /// Position in the survey's presentation sequence.
    order: u32,
}

impl Question {
    /// Create a new, optional question.
    pub fn new(id: QuestionId, order: u32, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            required: false,
            order,
        }
    }

    /// Create a question where any subset of `options` may be selected.
    pub fn multiple_choice(
        id: QuestionId,
        order: u32,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self::new(
            id,
            order,
            text,
            QuestionKind::MultipleChoice(ChoiceQuestion::new(options)),
        )
    }

    /// Create a question where exactly one of `options` is picked.
    pub fn single_answer(
        id: QuestionId,
        order: u32,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self::new(
            id,
            order,
            text,
            QuestionKind::SingleAnswer(ChoiceQuestion::new(options)),
        )
    }

    /// Create a free-text question.
    pub fn open_text(id: QuestionId, order: u32, text: impl Into<String>) -> Self {
        Self::new(id, order, text, QuestionKind::OpenText)
    }

    /// Create a rating question on the bounded scale.
    pub fn rating(id: QuestionId, order: u32, text: impl Into<String>) -> Self {
        Self::new(id, order, text, QuestionKind::Rating)
    }

    /// Mark this question as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Whether an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the presentation order.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the offered options; empty for kinds without options.
    pub fn options(&self) -> &[AnswerOption] {
        match &self.kind {
            QuestionKind::MultipleChoice(choice) | QuestionKind::SingleAnswer(choice) => {
                choice.options()
            }
            QuestionKind::OpenText | QuestionKind::Rating => &[],
        }
    }

    /// Whether `answer` satisfies this question's `required` constraint.
    ///
    /// Always true for optional questions. For required ones, a missing,
    /// empty or mismatched answer does not count.
    pub fn is_answered(&self, answer: Option<&Answer>) -> bool {
        if !self.required {
            return true;
        }
        let Some(answer) = answer else {
            return false;
        };
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice(_), Answer::Selection(ids)) => !ids.is_empty(),
            (QuestionKind::SingleAnswer(_), Answer::Choice(_)) => true,
            (QuestionKind::OpenText, Answer::Text(text)) => !text.trim().is_empty(),
            (QuestionKind::Rating, Answer::Rating(value)) => {
                (RATING_MIN..=RATING_MAX).contains(value)
            }
            _ => false,
        }
    }

    /// Check that `answer` is a valid value for this question.
    ///
    /// This guards the caller contract, not respondent input: an answer of
    /// the wrong shape, an option id from another question, or a rating off
    /// the scale is a programming error and fails loudly.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), ModelError> {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice(choice), Answer::Selection(ids)) => {
                for &id in ids {
                    if !choice.contains(id) {
                        return Err(ModelError::ForeignOption {
                            question: self.id,
                            option: id,
                        });
                    }
                }
                Ok(())
            }
            (QuestionKind::SingleAnswer(choice), Answer::Choice(id)) => {
                if choice.contains(*id) {
                    Ok(())
                } else {
                    Err(ModelError::ForeignOption {
                        question: self.id,
                        option: *id,
                    })
                }
            }
            (QuestionKind::OpenText, Answer::Text(_)) => Ok(()),
            (QuestionKind::Rating, Answer::Rating(value)) => {
                if (RATING_MIN..=RATING_MAX).contains(value) {
                    Ok(())
                } else {
                    Err(ModelError::RatingOutOfRange {
                        question: self.id,
                        value: *value,
                    })
                }
            }
            _ => Err(ModelError::AnswerShape {
                question: self.id,
                expected: self.kind.answer_name(),
                actual: answer.type_name(),
            }),
        }
    }
}

/// The kind of question, determining the answer shape.
///
/// The set is closed by the domain: adding a fifth kind is a deliberate
/// model change, not an extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Select any subset of the options.
    MultipleChoice(ChoiceQuestion),

    /// Select exactly one of the options.
    SingleAnswer(ChoiceQuestion),

    /// Free-form text.
    OpenText,

    /// An integer rating from `RATING_MIN` to `RATING_MAX` inclusive.
    /// The wire name is historical; the value is a rating, not a percent.
    #[serde(rename = "percentage")]
    Rating,
}

impl QuestionKind {
    /// Check if this kind offers options to pick from.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::MultipleChoice(_) | Self::SingleAnswer(_))
    }

    /// Name of the answer shape this kind expects, for error messages.
    pub fn answer_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice(_) => "selection",
            Self::SingleAnswer(_) => "choice",
            Self::OpenText => "text",
            Self::Rating => "rating",
        }
    }
}

/// Configuration for the two option-backed question kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    /// The options offered, in presentation order.
    options: Vec<AnswerOption>,
}

impl ChoiceQuestion {
    /// Create from the given options, sorting them by presentation order.
    pub fn new(mut options: Vec<AnswerOption>) -> Self {
        options.sort_by_key(|option| option.order);
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Look up an option by id.
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Check if an option with this id is offered.
    pub fn contains(&self, id: OptionId) -> bool {
        self.option(id).is_some()
    }

    /// Number of options offered.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if no options are offered.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One selectable option, owned exclusively by its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Unique id of this option within its question.
    pub id: OptionId,

    /// Label shown to the respondent.
    pub text: String,

    /// Position among the question's options.
    pub order: u32,
}

impl AnswerOption {
    /// Create a new option.
    pub fn new(id: OptionId, order: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<AnswerOption> {
        vec![
            AnswerOption::new(1, 1, "Monday"),
            AnswerOption::new(2, 2, "Friday"),
        ]
    }

    #[test]
    fn optional_question_counts_as_answered() {
        let question = Question::open_text(1, 1, "Suggestions?");
        assert!(question.is_answered(None));
        assert!(question.is_answered(Some(&Answer::Text(String::new()))));
    }

    #[test]
    fn required_open_text_needs_non_blank_input() {
        let question = Question::open_text(1, 1, "Suggestions?").required();
        assert!(!question.is_answered(None));
        assert!(!question.is_answered(Some(&Answer::Text("   ".into()))));
        assert!(question.is_answered(Some(&Answer::Text("more seats".into()))));
    }

    #[test]
    fn required_selection_needs_at_least_one_option() {
        let question = Question::multiple_choice(1, 1, "Which days?", options()).required();
        assert!(!question.is_answered(Some(&Answer::Selection(vec![]))));
        assert!(question.is_answered(Some(&Answer::Selection(vec![2]))));
    }

    #[test]
    fn check_answer_rejects_foreign_option() {
        let question = Question::single_answer(1, 1, "Which day?", options());
        assert!(question.check_answer(&Answer::Choice(2)).is_ok());
        assert!(matches!(
            question.check_answer(&Answer::Choice(9)),
            Err(ModelError::ForeignOption {
                question: 1,
                option: 9
            })
        ));
    }

    #[test]
    fn check_answer_rejects_wrong_shape() {
        let question = Question::rating(3, 1, "How satisfied are you?");
        assert!(matches!(
            question.check_answer(&Answer::Text("five".into())),
            Err(ModelError::AnswerShape { question: 3, .. })
        ));
    }

    #[test]
    fn check_answer_rejects_rating_off_the_scale() {
        let question = Question::rating(3, 1, "How satisfied are you?");
        assert!(question.check_answer(&Answer::Rating(5)).is_ok());
        assert!(matches!(
            question.check_answer(&Answer::Rating(6)),
            Err(ModelError::RatingOutOfRange {
                question: 3,
                value: 6
            })
        ));
    }

    #[test]
    fn options_are_empty_for_kinds_without_them() {
        let question = Question::rating(3, 1, "How satisfied are you?");
        assert!(question.options().is_empty());
        assert!(!question.kind().has_options());

        let question = Question::multiple_choice(1, 1, "Which days?", options());
        assert_eq!(question.options().len(), 2);
        assert!(question.kind().has_options());
    }

    #[test]
    fn choice_options_are_sorted_by_order() {
        let choice = ChoiceQuestion::new(vec![
            AnswerOption::new(5, 2, "second"),
            AnswerOption::new(9, 1, "first"),
        ]);
        assert_eq!(choice.options()[0].id, 9);
        assert_eq!(choice.options()[1].id, 5);
    }
}
