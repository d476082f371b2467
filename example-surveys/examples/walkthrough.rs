//! Scripts a class of students through the course feedback survey and
//! prints the aggregated statistics as JSON.

use anyhow::Result;
use campus_survey::{Answer, ScriptedRespondent, aggregate};
use example_surveys::{course_feedback, sample_class};

fn main() -> Result<()> {
    env_logger::init();

    let survey = course_feedback();
    let class = sample_class();

    let scripts = [
        ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(11))
            .with_answer(2, vec![20, 21])
            .with_answer(3, Answer::Rating(5))
            .with_answer(4, "more worked examples")
            .with_comment("best course this term"),
        ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(11))
            .with_answer(2, vec![20])
            .with_answer(3, Answer::Rating(4)),
        ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(12))
            .with_answer(2, vec![20, 22, 23])
            .with_answer(3, Answer::Rating(3))
            .with_answer(4, "slow down in week 6"),
        ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(10))
            .with_answer(3, Answer::Rating(5)),
        ScriptedRespondent::new()
            .with_answer(1, Answer::Choice(11))
            .with_answer(2, vec![21, 23])
            .with_answer(3, Answer::Rating(5))
            .with_comment("thanks!"),
    ];

    let mut submissions = Vec::new();
    for (student, script) in class.iter().zip(&scripts) {
        submissions.push(script.run(&survey, student)?);
    }

    let stats = aggregate(&survey, &submissions)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
