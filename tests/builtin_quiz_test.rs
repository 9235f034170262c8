mod common;

use common::category;
use std::sync::Arc;
use vote_finder::config::builtin_questionnaire;
use vote_finder::{score, AnswerSet, QuizSession, Step};

#[test]
fn builtin_questionnaire_loads() {
    let quiz = builtin_questionnaire().unwrap();
    assert_eq!(quiz.value_range().max, 5);
    assert!(quiz.questions().iter().all(|q| q.options.len() == 5));
    assert!(quiz.question("three-waters").and_then(|q| q.description.as_ref()).is_some());
}

#[test]
fn strongly_agreeing_with_housing_favours_the_left() {
    let quiz = builtin_questionnaire().unwrap();
    let mut answers = AnswerSet::new();
    answers.record("housing-affordability", 5);

    let result = score(&quiz, &answers);
    assert_eq!(result.percentage(&category("Labour")), Some(100));
    assert_eq!(result.percentage(&category("Greens")), Some(100));
    assert_eq!(result.percentage(&category("Te Pati Maori")), Some(100));
    assert_eq!(result.percentage(&category("ACT")), Some(0));
    assert_eq!(result.primary_match, Some(category("Labour")));
    assert_eq!(result.secondary_match, Some(category("Greens")));
    assert!(result.description.starts_with("You align with Labour's"));
}

#[test]
fn full_session_ends_with_a_result() {
    let quiz = Arc::new(builtin_questionnaire().unwrap());
    let total = quiz.len();
    let mut session = QuizSession::new(Arc::clone(&quiz));

    let mut finished = None;
    for _ in 0..total {
        match session.answer(5).unwrap() {
            Step::Next(_) => {}
            Step::Finished(result) => finished = Some(result),
        }
    }

    let result = finished.expect("last answer should finish the quiz");
    assert_eq!(result.answered, total);
    assert_eq!(result.percentages.len(), 6);
    assert!(result.percentages.values().all(|p| *p <= 100));
    assert!(result.share_text().unwrap().starts_with("I matched with "));
    assert_eq!(result, score(&quiz, session.answers()));
}
