//! Turning stored submissions into per-question statistical summaries.
//!
//! [`aggregate`] is a pure function of the survey and the submission set:
//! re-running it on identical inputs yields structurally identical output,
//! with questions in presentation order and answers in submission order.
//! Zero submissions is a valid input - every question reports an explicit
//! zero state so a brand-new survey renders cleanly.

use campus_survey_types::{
    Answer, ModelError, OptionId, QuestionId, QuestionKind, RATING_MAX, RATING_MIN, Submission,
    Survey, TargetAudience,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Display-ready statistics for one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyStatistics {
    pub survey: SurveyInfo,

    /// Number of submissions aggregated.
    pub total_responses: usize,

    /// `100 * total_responses / required_participants`, rounded. May
    /// exceed 100 when participation overshoots the target; 0 when no
    /// target is configured.
    pub completion_rate: u32,

    /// One entry per survey question, in presentation order.
    pub questions: Vec<QuestionStatistics>,

    /// Every non-blank comment, in submission order.
    pub comments: Vec<String>,
}

/// Survey metadata carried alongside the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyInfo {
    pub title: String,
    pub description: String,
    pub owner_name: String,
    pub required_participants: u32,
    pub audience: TargetAudience,
}

impl From<&Survey> for SurveyInfo {
    fn from(survey: &Survey) -> Self {
        Self {
            title: survey.title().to_string(),
            description: survey.description().to_string(),
            owner_name: survey.owner_name().to_string(),
            required_participants: survey.required_participants(),
            audience: survey.audience().clone(),
        }
    }
}

/// Summary for a single question, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionStatistics {
    pub question_id: QuestionId,

    pub text: String,

    /// Submissions that answered this question at all.
    pub total_answers: usize,

    pub summary: AnswerSummary,
}

/// The kind-specific payload of a question summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSummary {
    /// Per-option counts for the two choice kinds.
    Options(Vec<OptionCount>),

    /// Non-blank free-text answers in submission order.
    Texts(Vec<String>),

    /// Raw ratings in submission order, plus their distribution over the
    /// scale.
    Ratings {
        values: Vec<u8>,
        distribution: Vec<RatingCount>,
    },
}

/// How often one option was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCount {
    pub option_id: OptionId,

    pub text: String,

    pub count: usize,

    /// `round(100 * count / total_answers)`, 0 when nobody answered.
    ///
    /// Rounded independently per option: single-answer percentages sum to
    /// roughly 100 (within rounding), multiple-choice percentages are
    /// unconstrained because a respondent may tick several options.
    pub percentage: u8,
}

/// How often one rating value was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: usize,
    pub percentage: u8,
}

/// Aggregate `submissions` into per-question summaries for `survey`.
///
/// A submission referencing a question or option the survey does not have
/// is a caller contract breach and fails loudly; an empty submission set
/// is not an error.
pub fn aggregate(
    survey: &Survey,
    submissions: &[Submission],
) -> Result<SurveyStatistics, ModelError> {
    for submission in submissions {
        for (&question_id, answer) in submission.answers() {
            let question = survey
                .question(question_id)
                .ok_or(ModelError::UnknownQuestion(question_id))?;
            question.check_answer(answer)?;
        }
    }

    let questions = survey
        .questions()
        .iter()
        .map(|question| {
            let answered: Vec<&Answer> = submissions
                .iter()
                .filter_map(|submission| submission.answer(question.id()))
                .filter(|answer| !answer.is_empty())
                .collect();
            let total_answers = answered.len();

            let summary = match question.kind() {
                QuestionKind::MultipleChoice(choice) | QuestionKind::SingleAnswer(choice) => {
                    AnswerSummary::Options(
                        choice
                            .options()
                            .iter()
                            .map(|option| {
                                let count = answered
                                    .iter()
                                    .filter(|answer| answer.selects(option.id))
                                    .count();
                                OptionCount {
                                    option_id: option.id,
                                    text: option.text.clone(),
                                    count,
                                    percentage: share(count, total_answers),
                                }
                            })
                            .collect(),
                    )
                }
                QuestionKind::OpenText => AnswerSummary::Texts(
                    answered
                        .iter()
                        .filter_map(|answer| answer.as_text())
                        .map(|text| text.trim().to_string())
                        .collect(),
                ),
                QuestionKind::Rating => {
                    let values: Vec<u8> = answered
                        .iter()
                        .filter_map(|answer| answer.as_rating())
                        .collect();
                    let distribution = (RATING_MIN..=RATING_MAX)
                        .map(|rating| {
                            let count =
                                values.iter().filter(|&&value| value == rating).count();
                            RatingCount {
                                rating,
                                count,
                                percentage: share(count, total_answers),
                            }
                        })
                        .collect();
                    AnswerSummary::Ratings {
                        values,
                        distribution,
                    }
                }
            };

            QuestionStatistics {
                question_id: question.id(),
                text: question.text().to_string(),
                total_answers,
                summary,
            }
        })
        .collect();

    let comments: Vec<String> = submissions
        .iter()
        .filter_map(|submission| submission.comment())
        .map(str::trim)
        .filter(|comment| !comment.is_empty())
        .map(str::to_string)
        .collect();

    debug!(
        "survey {}: aggregated {} submissions over {} questions",
        survey.id(),
        submissions.len(),
        survey.len()
    );

    Ok(SurveyStatistics {
        survey: SurveyInfo::from(survey),
        total_responses: submissions.len(),
        completion_rate: completion_rate(submissions.len(), survey.required_participants()),
        questions,
        comments,
    })
}

/// Rounded percentage share, 0 for an empty denominator.
fn share(count: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        (100.0 * count as f64 / total as f64).round() as u8
    }
}

/// Rounded participation percentage against the configured target.
///
/// Deliberately not clamped: overshooting the target reads as more than
/// 100 percent.
fn completion_rate(total_responses: usize, required_participants: u32) -> u32 {
    if required_participants == 0 {
        0
    } else {
        (100.0 * total_responses as f64 / f64::from(required_participants)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use campus_survey_types::{AnswerMap, AnswerOption, Question};
    use chrono::Utc;

    use super::*;

    fn submission(survey: &Survey, respondent_id: u32, answers: Vec<(u32, Answer)>) -> Submission {
        let answers: AnswerMap = answers.into_iter().collect();
        Submission::new(survey.id(), respondent_id, answers, None, Utc::now())
    }

    fn single_answer_survey() -> Survey {
        Survey::new(
            1,
            "Commute",
            vec![Question::single_answer(
                1,
                1,
                "How do you get to campus?",
                vec![
                    AnswerOption::new(1, 1, "A"),
                    AnswerOption::new(2, 2, "B"),
                    AnswerOption::new(3, 3, "C"),
                ],
            )],
        )
        .unwrap()
    }

    #[test]
    fn single_answer_counts_and_percentages() {
        let survey = single_answer_survey();
        let submissions: Vec<_> = [1, 1, 2, 3]
            .iter()
            .enumerate()
            .map(|(i, &option)| {
                submission(&survey, i as u32, vec![(1, Answer::Choice(option))])
            })
            .collect();

        let stats = aggregate(&survey, &submissions).unwrap();
        let question = &stats.questions[0];
        assert_eq!(question.total_answers, 4);

        let AnswerSummary::Options(options) = &question.summary else {
            panic!("expected option counts");
        };
        assert_eq!((options[0].count, options[0].percentage), (2, 50));
        assert_eq!((options[1].count, options[1].percentage), (1, 25));
        assert_eq!((options[2].count, options[2].percentage), (1, 25));

        let total: usize = options.iter().map(|option| option.count).sum();
        assert_eq!(total, submissions.len());
    }

    #[test]
    fn multiple_choice_percentages_are_per_option() {
        let survey = Survey::new(
            1,
            "Facilities",
            vec![Question::multiple_choice(
                1,
                1,
                "Which do you use?",
                vec![
                    AnswerOption::new(1, 1, "X"),
                    AnswerOption::new(2, 2, "Y"),
                ],
            )],
        )
        .unwrap();
        let submissions = vec![
            submission(&survey, 1, vec![(1, Answer::Selection(vec![1, 2]))]),
            submission(&survey, 2, vec![(1, Answer::Selection(vec![1]))]),
        ];

        let stats = aggregate(&survey, &submissions).unwrap();
        let question = &stats.questions[0];
        assert_eq!(question.total_answers, 2);

        let AnswerSummary::Options(options) = &question.summary else {
            panic!("expected option counts");
        };
        assert_eq!((options[0].count, options[0].percentage), (2, 100));
        assert_eq!((options[1].count, options[1].percentage), (1, 50));
    }

    #[test]
    fn rating_distribution() {
        let survey = Survey::new(
            1,
            "Satisfaction",
            vec![Question::rating(1, 1, "Overall?")],
        )
        .unwrap();
        let submissions: Vec<_> = [5, 5, 4, 3, 5]
            .iter()
            .enumerate()
            .map(|(i, &value)| submission(&survey, i as u32, vec![(1, Answer::Rating(value))]))
            .collect();

        let stats = aggregate(&survey, &submissions).unwrap();
        let question = &stats.questions[0];
        assert_eq!(question.total_answers, 5);

        let AnswerSummary::Ratings {
            values,
            distribution,
        } = &question.summary
        else {
            panic!("expected ratings");
        };
        assert_eq!(values, &[5, 5, 4, 3, 5]);
        assert_eq!((distribution[4].count, distribution[4].percentage), (3, 60));
        assert_eq!((distribution[3].count, distribution[3].percentage), (1, 20));
        assert_eq!((distribution[2].count, distribution[2].percentage), (1, 20));
        assert_eq!(distribution[0].count, 0);
        assert_eq!(distribution[1].count, 0);
    }

    #[test]
    fn zero_submissions_yield_a_well_formed_zero_state() {
        let survey = Survey::new(
            1,
            "Mixed",
            vec![
                Question::single_answer(
                    1,
                    1,
                    "Pick one",
                    vec![
                        AnswerOption::new(1, 1, "A"),
                        AnswerOption::new(2, 2, "B"),
                    ],
                ),
                Question::open_text(2, 2, "Say more"),
                Question::rating(3, 3, "Rate it"),
            ],
        )
        .unwrap();

        let stats = aggregate(&survey, &[]).unwrap();
        assert_eq!(stats.total_responses, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.questions.len(), 3);
        for question in &stats.questions {
            assert_eq!(question.total_answers, 0);
            match &question.summary {
                AnswerSummary::Options(options) => {
                    for option in options {
                        assert_eq!((option.count, option.percentage), (0, 0));
                    }
                }
                AnswerSummary::Texts(texts) => assert!(texts.is_empty()),
                AnswerSummary::Ratings {
                    values,
                    distribution,
                } => {
                    assert!(values.is_empty());
                    for bucket in distribution {
                        assert_eq!((bucket.count, bucket.percentage), (0, 0));
                    }
                }
            }
        }
    }

    #[test]
    fn open_text_answers_keep_submission_order() {
        let survey = Survey::new(
            1,
            "Ideas",
            vec![Question::open_text(1, 1, "Suggestions?")],
        )
        .unwrap();
        let submissions = vec![
            submission(&survey, 1, vec![(1, Answer::Text("longer hours".into()))]),
            submission(&survey, 2, vec![]),
            submission(&survey, 3, vec![(1, Answer::Text("  more staff  ".into()))]),
        ];

        let stats = aggregate(&survey, &submissions).unwrap();
        let question = &stats.questions[0];
        assert_eq!(question.total_answers, 2);
        assert_eq!(
            question.summary,
            AnswerSummary::Texts(vec!["longer hours".into(), "more staff".into()])
        );
    }

    #[test]
    fn comments_are_collected_across_submissions() {
        let survey = single_answer_survey();
        let mut submissions = vec![
            Submission::new(
                survey.id(),
                1,
                AnswerMap::new(),
                Some("great survey".into()),
                Utc::now(),
            ),
            Submission::new(survey.id(), 2, AnswerMap::new(), Some("  ".into()), Utc::now()),
            Submission::new(survey.id(), 3, AnswerMap::new(), None, Utc::now()),
        ];
        submissions.push(Submission::new(
            survey.id(),
            4,
            AnswerMap::new(),
            Some("too long".into()),
            Utc::now(),
        ));

        let stats = aggregate(&survey, &submissions).unwrap();
        assert_eq!(stats.comments, vec!["great survey", "too long"]);
    }

    #[test]
    fn completion_rate_can_overshoot() {
        let survey = single_answer_survey().with_required_participants(2);
        let submissions: Vec<_> = (0..3)
            .map(|i| submission(&survey, i, vec![(1, Answer::Choice(1))]))
            .collect();
        let stats = aggregate(&survey, &submissions).unwrap();
        assert_eq!(stats.completion_rate, 150);
    }

    #[test]
    fn unknown_question_fails_loudly() {
        let survey = single_answer_survey();
        let submissions = vec![submission(&survey, 1, vec![(99, Answer::Rating(3))])];
        assert!(matches!(
            aggregate(&survey, &submissions),
            Err(ModelError::UnknownQuestion(99))
        ));
    }

    #[test]
    fn foreign_option_fails_loudly() {
        let survey = single_answer_survey();
        let submissions = vec![submission(&survey, 1, vec![(1, Answer::Choice(42))])];
        assert!(matches!(
            aggregate(&survey, &submissions),
            Err(ModelError::ForeignOption {
                question: 1,
                option: 42
            })
        ));
    }

    #[test]
    fn aggregation_is_deterministic() {
        let survey = single_answer_survey().with_required_participants(10);
        let submissions = vec![
            submission(&survey, 1, vec![(1, Answer::Choice(1))]),
            submission(&survey, 2, vec![(1, Answer::Choice(2))]),
        ];
        let first = aggregate(&survey, &submissions).unwrap();
        let second = aggregate(&survey, &submissions).unwrap();
        assert_eq!(first, second);
    }
}
