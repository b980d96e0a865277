use std::sync::Arc;

use prelaunch_intake::SurveyIntake;
use prelaunch_types::{AnswerError, Answers, Applied, Question, Section};

/// Error type for survey-runner operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// A runner cannot be built over an empty question list.
    #[error("A survey needs at least one question")]
    Empty,

    /// The survey reached its terminal submitted state; answers are frozen.
    #[error("Survey already submitted")]
    AlreadySubmitted,

    /// An answer-store mutation was rejected.
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// The submission controller's state.
///
/// A failed submission is not a resting state: the runner records the error
/// and returns to `Idle` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Interactive; answers may change and navigation is live.
    Idle,

    /// The intake call is in flight. Observable only across the await in
    /// [`SurveyRunner::advance`].
    Submitting,

    /// Terminal; the answer store was accepted atomically.
    Submitted,
}

/// What a call to [`SurveyRunner::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor moved forward one step.
    Advanced,

    /// The operation was inert: the completion gate for the current question
    /// is unsatisfied, or the survey is already terminal.
    Blocked,

    /// Final step: the intake accepted the answers; the runner is terminal.
    Submitted,

    /// Final step: the intake call failed. The runner is back in idle with
    /// the error recorded; the user may retry.
    Failed,
}

/// The stepwise questionnaire engine.
///
/// Owns a fixed, ordered question list and a cursor into it. Forward motion
/// is gated on the current question being satisfactorily answered; backward
/// motion is unconditional and floors at the first question. Advancing from
/// the final step submits the whole answer store through the injected
/// intake.
pub struct SurveyRunner {
    questions: Vec<Question>,
    cursor: usize,
    answers: Answers,
    state: SubmitState,
    last_error: Option<String>,
    intake: Arc<dyn SurveyIntake>,
}

impl SurveyRunner {
    /// Create a runner over a fixed question sequence.
    pub fn new(
        questions: Vec<Question>,
        intake: Arc<dyn SurveyIntake>,
    ) -> Result<Self, SurveyError> {
        if questions.is_empty() {
            return Err(SurveyError::Empty);
        }
        Ok(Self {
            questions,
            cursor: 0,
            answers: Answers::new(),
            state: SubmitState::Idle,
            last_error: None,
            intake,
        })
    }

    /// The question the cursor is on.
    pub fn current(&self) -> &Question {
        &self.questions[self.cursor]
    }

    /// The current step index, `0 <= cursor < len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whether the cursor is on the final question.
    pub fn is_last_step(&self) -> bool {
        self.cursor == self.questions.len() - 1
    }

    /// 1-based position for "N of M" display.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.questions.len())
    }

    /// Fraction of the survey reached, for a progress bar.
    pub fn progress(&self) -> f64 {
        (self.cursor + 1) as f64 / self.questions.len() as f64
    }

    /// The section badge of the current question.
    pub fn section(&self) -> &Section {
        self.current().section()
    }

    /// The answer store.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The submission controller's state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The message of the last failed submission, until the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the completion gate permits forward navigation right now.
    pub fn can_advance(&self) -> bool {
        self.answers.satisfies(self.current())
    }

    /// Select (or toggle) a choice on the current question.
    ///
    /// The returned [`Applied`] tells the caller whether the choice was
    /// recorded, toggled off, or rejected at a multi-select cap - the last
    /// is surfaced as a transient notice, not an error.
    pub fn select(&mut self, choice_id: &str) -> Result<Applied, SurveyError> {
        if self.state == SubmitState::Submitted {
            return Err(SurveyError::AlreadySubmitted);
        }
        let question = self.questions[self.cursor].clone();
        let applied = self.answers.apply(&question, choice_id)?;
        tracing::debug!(
            question = question.id(),
            choice = choice_id,
            ?applied,
            "selection applied"
        );
        Ok(applied)
    }

    /// Move back one step. Unconditional, inert at the first question and
    /// after submission.
    pub fn retreat(&mut self) {
        if self.state == SubmitState::Submitted {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move forward one step, or submit from the final step.
    ///
    /// Inert when the completion gate for the current question is not
    /// satisfied - the cursor never moves past an unanswered question, and
    /// submission is never triggered with an incomplete final answer.
    pub async fn advance(&mut self) -> StepOutcome {
        if self.state == SubmitState::Submitted {
            return StepOutcome::Blocked;
        }
        if !self.can_advance() {
            return StepOutcome::Blocked;
        }
        if !self.is_last_step() {
            self.cursor += 1;
            tracing::debug!(cursor = self.cursor, "advanced to next question");
            return StepOutcome::Advanced;
        }
        self.submit().await
    }

    /// Reset to the first question with a cleared store, as when the survey
    /// modal is reopened.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
        self.state = SubmitState::Idle;
        self.last_error = None;
    }

    async fn submit(&mut self) -> StepOutcome {
        self.state = SubmitState::Submitting;
        self.last_error = None;
        tracing::debug!(answered = self.answers.len(), "submitting survey");

        match self.intake.submit_survey(&self.answers).await {
            Ok(()) => {
                self.state = SubmitState::Submitted;
                tracing::info!("survey accepted");
                StepOutcome::Submitted
            }
            Err(error) => {
                self.state = SubmitState::Idle;
                self.last_error = Some(error.to_string());
                tracing::warn!(%error, "survey submission failed");
                StepOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prelaunch_intake::ScriptedIntake;
    use prelaunch_types::Choice;

    fn two_step_survey(intake: Arc<dyn SurveyIntake>) -> SurveyRunner {
        let questions = vec![
            Question::single(
                "a",
                "Yes or no?",
                Section::new("One", 1, 2),
                vec![Choice::new("yes", "Yes"), Choice::new("no", "No")],
            ),
            Question::multi_exact(
                "b",
                "Pick exactly 2",
                2,
                Section::new("Two", 2, 2),
                vec![
                    Choice::new("x", "X"),
                    Choice::new("y", "Y"),
                    Choice::new("z", "Z"),
                ],
            ),
        ];
        SurveyRunner::new(questions, intake).unwrap()
    }

    #[test]
    fn empty_survey_is_rejected() {
        let intake = Arc::new(ScriptedIntake::new());
        assert!(matches!(
            SurveyRunner::new(Vec::new(), intake),
            Err(SurveyError::Empty)
        ));
    }

    #[test]
    fn retreat_at_first_question_is_inert() {
        let mut runner = two_step_survey(Arc::new(ScriptedIntake::new()));
        runner.retreat();
        assert_eq!(runner.cursor(), 0);
    }

    #[tokio::test]
    async fn advance_past_unsatisfied_gate_is_inert() {
        let mut runner = two_step_survey(Arc::new(ScriptedIntake::new()));
        assert_eq!(runner.advance().await, StepOutcome::Blocked);
        assert_eq!(runner.cursor(), 0);
    }

    #[tokio::test]
    async fn progress_and_position_track_cursor() {
        let mut runner = two_step_survey(Arc::new(ScriptedIntake::new()));
        assert_eq!(runner.position(), (1, 2));
        assert!((runner.progress() - 0.5).abs() < f64::EPSILON);

        runner.select("yes").unwrap();
        runner.advance().await;
        assert_eq!(runner.position(), (2, 2));
        assert_eq!(runner.section().name(), "Two");
        assert!((runner.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn reset_returns_to_a_cleared_first_step() {
        let mut runner = two_step_survey(Arc::new(ScriptedIntake::new()));
        runner.select("yes").unwrap();
        runner.advance().await;
        runner.select("x").unwrap();

        runner.reset();
        assert_eq!(runner.cursor(), 0);
        assert!(runner.answers().is_empty());
        assert_eq!(runner.state(), SubmitState::Idle);
    }
}
