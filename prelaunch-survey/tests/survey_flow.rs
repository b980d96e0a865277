//! End-to-end survey flows over a scripted intake.

use std::sync::Arc;

use prelaunch_intake::{IntakeCall, ScriptedIntake};
use prelaunch_survey::{StepOutcome, SubmitState, SurveyError, SurveyRunner};
use prelaunch_types::{Applied, Choice, Question, Section};

fn questions() -> Vec<Question> {
    vec![
        Question::single(
            "a",
            "Are you in?",
            Section::new("Interest", 1, 2),
            vec![Choice::new("yes", "Yes"), Choice::new("no", "No")],
        ),
        Question::multi_exact(
            "b",
            "Pick exactly 2 features",
            2,
            Section::new("Features", 2, 2),
            vec![
                Choice::new("x", "X"),
                Choice::new("y", "Y"),
                Choice::new("z", "Z"),
            ],
        ),
    ]
}

#[tokio::test]
async fn two_question_survey_submits_the_full_store() {
    let intake = Arc::new(ScriptedIntake::new());
    let mut runner = SurveyRunner::new(questions(), intake.clone()).unwrap();

    assert!(!runner.can_advance());
    runner.select("yes").unwrap();
    assert!(runner.can_advance());
    assert_eq!(runner.advance().await, StepOutcome::Advanced);

    runner.select("x").unwrap();
    assert!(!runner.can_advance());
    runner.select("y").unwrap();
    assert!(runner.can_advance());

    assert_eq!(runner.advance().await, StepOutcome::Submitted);
    assert_eq!(runner.state(), SubmitState::Submitted);

    let calls = intake.calls();
    assert_eq!(calls.len(), 1);
    let IntakeCall::Survey(payload) = &calls[0] else {
        panic!("expected a survey call");
    };
    assert_eq!(payload["a"], serde_json::json!("yes"));
    assert_eq!(payload["b"], serde_json::json!(["x", "y"]));
}

#[tokio::test]
async fn third_selection_at_cap_raises_an_advisory_not_an_error() {
    let intake = Arc::new(ScriptedIntake::new());
    let mut runner = SurveyRunner::new(questions(), intake).unwrap();

    runner.select("yes").unwrap();
    runner.advance().await;
    runner.select("x").unwrap();
    runner.select("y").unwrap();

    let applied = runner.select("z").unwrap();
    assert_eq!(applied, Applied::AtCapacity);
    assert_eq!(
        runner.answers().get("b").unwrap().as_multi(),
        Some(&["x".to_string(), "y".to_string()][..])
    );
}

#[tokio::test]
async fn failed_submission_returns_to_idle_and_allows_retry() {
    let intake = Arc::new(ScriptedIntake::new().then_fail("intake down"));
    let mut runner = SurveyRunner::new(questions(), intake.clone()).unwrap();

    runner.select("yes").unwrap();
    runner.advance().await;
    runner.select("x").unwrap();
    runner.select("y").unwrap();

    assert_eq!(runner.advance().await, StepOutcome::Failed);
    assert_eq!(runner.state(), SubmitState::Idle);
    assert!(runner.last_error().unwrap().contains("intake down"));

    // Answers are intact; a manual retry succeeds.
    assert_eq!(runner.advance().await, StepOutcome::Submitted);
    assert!(runner.last_error().is_none());
    assert_eq!(intake.calls().len(), 2);
}

#[tokio::test]
async fn retreat_is_unconditional_and_preserves_answers() {
    let intake = Arc::new(ScriptedIntake::new());
    let mut runner = SurveyRunner::new(questions(), intake).unwrap();

    runner.select("yes").unwrap();
    runner.advance().await;
    runner.select("x").unwrap();

    // Back off the half-answered multi question, then return to it.
    runner.retreat();
    assert_eq!(runner.cursor(), 0);
    runner.advance().await;
    assert_eq!(runner.answers().selected_count("b"), 1);
}

#[tokio::test]
async fn submitted_survey_is_frozen() {
    let intake = Arc::new(ScriptedIntake::new());
    let mut runner = SurveyRunner::new(questions(), intake).unwrap();

    runner.select("yes").unwrap();
    runner.advance().await;
    runner.select("x").unwrap();
    runner.select("y").unwrap();
    runner.advance().await;

    assert!(matches!(
        runner.select("z"),
        Err(SurveyError::AlreadySubmitted)
    ));
    assert_eq!(runner.advance().await, StepOutcome::Blocked);
    runner.retreat();
    assert_eq!(runner.cursor(), 1);
}
