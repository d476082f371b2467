use campus_survey::{AnswerOption, Question, Survey, TargetAudience};

/// A targeted survey: first- and second-year students of two departments.
pub fn campus_life() -> Survey {
    Survey::new(
        2,
        "Campus life check-in",
        vec![
            Question::single_answer(
                1,
                1,
                "Do you live on campus?",
                vec![
                    AnswerOption::new(10, 1, "Yes"),
                    AnswerOption::new(11, 2, "No"),
                ],
            )
            .required(),
            Question::rating(2, 2, "How connected do you feel to campus life?").required(),
            Question::open_text(3, 3, "Anything the student office should know?"),
        ],
    )
    .expect("campus life survey is well-formed")
    .with_description("Early-semester check-in for new students.")
    .with_owner_name("Student Affairs Office")
    .with_required_participants(20)
    .with_audience(
        TargetAudience::everyone()
            .for_academic_years(vec![1, 2])
            .for_departments(vec![100, 200]),
    )
}
