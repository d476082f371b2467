use campus_survey::{AnswerOption, Question, Survey};

/// An end-of-course feedback survey exercising all four question kinds.
pub fn course_feedback() -> Survey {
    Survey::new(
        1,
        "Course feedback",
        vec![
            Question::single_answer(
                1,
                1,
                "How was the pace of the lectures?",
                vec![
                    AnswerOption::new(10, 1, "Too slow"),
                    AnswerOption::new(11, 2, "About right"),
                    AnswerOption::new(12, 3, "Too fast"),
                ],
            )
            .required(),
            Question::multiple_choice(
                2,
                2,
                "Which materials did you use?",
                vec![
                    AnswerOption::new(20, 1, "Slides"),
                    AnswerOption::new(21, 2, "Textbook"),
                    AnswerOption::new(22, 3, "Exercise sheets"),
                    AnswerOption::new(23, 4, "Recordings"),
                ],
            ),
            Question::rating(3, 3, "How satisfied are you with the course overall?").required(),
            Question::open_text(4, 4, "What would you improve?"),
        ],
    )
    .expect("course feedback survey is well-formed")
    .with_description("Anonymous feedback collected in the last lecture week.")
    .with_owner_name("Prof. Ueda")
    .with_required_participants(30)
}
