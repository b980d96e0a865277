use std::time::Duration;

use async_trait::async_trait;
use prelaunch_types::{Answers, FeatureId};

use crate::{
    BoardIntake, FeatureSuggestion, IntakeError, SurveyIntake, WaitlistIntake, WaitlistSignup,
};

/// Bounds an intake with a deadline.
///
/// The source simulation has no timeout at all: a call that never settles
/// leaves the UI pending forever. Wrapping an intake in `WithTimeout` turns
/// that hang into an [`IntakeError::TimedOut`], which the flow controllers
/// treat like any other failure (rollback or return to idle).
#[derive(Debug, Clone)]
pub struct WithTimeout<T> {
    inner: T,
    limit: Duration,
}

impl<T> WithTimeout<T> {
    /// Wrap an intake with the given deadline.
    pub fn new(inner: T, limit: Duration) -> Self {
        Self { inner, limit }
    }

    /// Unwrap the inner intake.
    pub fn into_inner(self) -> T {
        self.inner
    }

    async fn bounded<F>(&self, call: F) -> Result<(), IntakeError>
    where
        F: Future<Output = Result<(), IntakeError>> + Send,
    {
        match tokio::time::timeout(self.limit, call).await {
            Ok(settled) => settled,
            Err(_) => Err(IntakeError::TimedOut(self.limit)),
        }
    }
}

#[async_trait]
impl<T: WaitlistIntake> WaitlistIntake for WithTimeout<T> {
    async fn join_waitlist(&self, signup: &WaitlistSignup) -> Result<(), IntakeError> {
        self.bounded(self.inner.join_waitlist(signup)).await
    }
}

#[async_trait]
impl<T: SurveyIntake> SurveyIntake for WithTimeout<T> {
    async fn submit_survey(&self, answers: &Answers) -> Result<(), IntakeError> {
        self.bounded(self.inner.submit_survey(answers)).await
    }
}

#[async_trait]
impl<T: BoardIntake> BoardIntake for WithTimeout<T> {
    async fn toggle_vote(&self, feature: &FeatureId) -> Result<(), IntakeError> {
        self.bounded(self.inner.toggle_vote(feature)).await
    }

    async fn suggest_feature(&self, suggestion: &FeatureSuggestion) -> Result<(), IntakeError> {
        self.bounded(self.inner.suggest_feature(suggestion)).await
    }
}
