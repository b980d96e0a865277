use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use prelaunch_types::{Answers, FeatureId};

use crate::{
    BoardIntake, FeatureSuggestion, IntakeError, SurveyIntake, WaitlistIntake, WaitlistSignup,
};

/// A simulated intake transport.
///
/// Sleeps for a configurable delay before settling, standing in for the
/// network round-trip of a real endpoint. Succeeds by default; a failing
/// mock rejects every call, which is how the rollback paths are exercised
/// interactively.
#[derive(Debug, Clone)]
pub struct MockIntake {
    delay: Duration,
    fail: bool,
}

impl Default for MockIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIntake {
    /// Create a succeeding mock with a default 800ms delay.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(800),
            fail: false,
        }
    }

    /// Create a mock that rejects every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Set the simulated round-trip delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn settle(&self, endpoint: &'static str) -> Result<(), IntakeError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            tracing::debug!(endpoint, "mock intake rejecting call");
            return Err(IntakeError::failed(format!("{endpoint} intake unavailable")));
        }
        tracing::debug!(endpoint, "mock intake accepted call");
        Ok(())
    }
}

#[async_trait]
impl WaitlistIntake for MockIntake {
    async fn join_waitlist(&self, _signup: &WaitlistSignup) -> Result<(), IntakeError> {
        self.settle("waitlist").await
    }
}

#[async_trait]
impl SurveyIntake for MockIntake {
    async fn submit_survey(&self, _answers: &Answers) -> Result<(), IntakeError> {
        self.settle("survey").await
    }
}

#[async_trait]
impl BoardIntake for MockIntake {
    async fn toggle_vote(&self, _feature: &FeatureId) -> Result<(), IntakeError> {
        self.settle("vote").await
    }

    async fn suggest_feature(&self, _suggestion: &FeatureSuggestion) -> Result<(), IntakeError> {
        self.settle("suggestion").await
    }
}

/// One recorded call against a [`ScriptedIntake`], with the payload as it
/// would appear on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeCall {
    Waitlist(serde_json::Value),
    Survey(serde_json::Value),
    Vote(FeatureId),
    Suggestion(serde_json::Value),
}

/// A timerless intake double for tests.
///
/// Settles immediately with scripted outcomes (consumed front to back; an
/// exhausted script keeps succeeding) and records every call so tests can
/// assert payload shapes without timers or a transport.
#[derive(Debug, Default)]
pub struct ScriptedIntake {
    outcomes: Mutex<VecDeque<Option<String>>>,
    calls: Mutex<Vec<IntakeCall>>,
}

impl ScriptedIntake {
    /// Create a double whose every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next call to succeed.
    pub fn then_ok(self) -> Self {
        self.outcomes.lock().unwrap().push_back(None);
        self
    }

    /// Script the next call to fail with the given message.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.outcomes.lock().unwrap().push_back(Some(message.into()));
        self
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<IntakeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn settle(&self, call: IntakeCall) -> Result<(), IntakeError> {
        self.calls.lock().unwrap().push(call);
        match self.outcomes.lock().unwrap().pop_front().flatten() {
            Some(message) => Err(IntakeError::failed(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WaitlistIntake for ScriptedIntake {
    async fn join_waitlist(&self, signup: &WaitlistSignup) -> Result<(), IntakeError> {
        let payload = serde_json::to_value(signup).map_err(anyhow::Error::from)?;
        self.settle(IntakeCall::Waitlist(payload))
    }
}

#[async_trait]
impl SurveyIntake for ScriptedIntake {
    async fn submit_survey(&self, answers: &Answers) -> Result<(), IntakeError> {
        let payload = serde_json::to_value(answers).map_err(anyhow::Error::from)?;
        self.settle(IntakeCall::Survey(payload))
    }
}

#[async_trait]
impl BoardIntake for ScriptedIntake {
    async fn toggle_vote(&self, feature: &FeatureId) -> Result<(), IntakeError> {
        self.settle(IntakeCall::Vote(feature.clone()))
    }

    async fn suggest_feature(&self, suggestion: &FeatureSuggestion) -> Result<(), IntakeError> {
        let payload = serde_json::to_value(suggestion).map_err(anyhow::Error::from)?;
        self.settle(IntakeCall::Suggestion(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[tokio::test(start_paused = true)]
    async fn mock_settles_after_delay() {
        let mock = MockIntake::new().with_delay(Duration::from_millis(500));
        let signup = WaitlistSignup::new("Alice", "alice@example.com", Role::Individual);
        mock.join_waitlist(&signup).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failing_mock_rejects_every_call() {
        let mock = MockIntake::failing().with_delay(Duration::ZERO);
        let result = mock.toggle_vote(&FeatureId::new("1")).await;
        assert!(matches!(result, Err(IntakeError::Failed(_))));
    }

    #[tokio::test]
    async fn scripted_outcomes_are_consumed_in_order() {
        let intake = ScriptedIntake::new().then_fail("down").then_ok();
        let feature = FeatureId::new("1");

        assert!(intake.toggle_vote(&feature).await.is_err());
        assert!(intake.toggle_vote(&feature).await.is_ok());
        // Exhausted script keeps succeeding.
        assert!(intake.toggle_vote(&feature).await.is_ok());

        assert_eq!(intake.calls().len(), 3);
    }

    #[tokio::test]
    async fn scripted_records_wire_payloads() {
        let intake = ScriptedIntake::new();
        let signup = WaitlistSignup::new("Alice", "alice@example.com", Role::TeamLead);
        intake.join_waitlist(&signup).await.unwrap();

        let calls = intake.calls();
        let IntakeCall::Waitlist(payload) = &calls[0] else {
            panic!("expected a waitlist call");
        };
        assert_eq!(payload["role"], serde_json::json!("team-lead"));
    }
}
