//! Ready-made surveys and respondents for tests and examples.

mod course_feedback;
pub use course_feedback::course_feedback;

mod campus_life;
pub use campus_life::campus_life;

use campus_survey::{Gender, Respondent};

/// A small mixed class of respondents.
pub fn sample_class() -> Vec<Respondent> {
    vec![
        Respondent::new(1, Gender::Female, 1, 100),
        Respondent::new(2, Gender::Male, 1, 100),
        Respondent::new(3, Gender::Female, 2, 200),
        Respondent::new(4, Gender::Other, 3, 200),
        Respondent::new(5, Gender::Male, 4, 300),
    ]
}
