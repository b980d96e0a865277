use async_trait::async_trait;
use prelaunch_types::{Answers, FeatureId};

use crate::{FeatureSuggestion, IntakeError, WaitlistSignup};

/// Intake endpoint for waitlist signups.
#[async_trait]
pub trait WaitlistIntake: Send + Sync {
    /// Submit a validated signup. Settles with a boolean-ish outcome: `Ok`
    /// on acceptance, an [`IntakeError`] otherwise.
    async fn join_waitlist(&self, signup: &WaitlistSignup) -> Result<(), IntakeError>;
}

/// Intake endpoint for completed surveys.
#[async_trait]
pub trait SurveyIntake: Send + Sync {
    /// Submit the full answer store in one atomic call. There is no
    /// partial-submission state: either everything is accepted or nothing is.
    async fn submit_survey(&self, answers: &Answers) -> Result<(), IntakeError>;
}

/// Intake endpoint for the feature board.
#[async_trait]
pub trait BoardIntake: Send + Sync {
    /// Confirm a vote toggle for the given feature.
    async fn toggle_vote(&self, feature: &FeatureId) -> Result<(), IntakeError>;

    /// Submit a new feature suggestion.
    async fn suggest_feature(&self, suggestion: &FeatureSuggestion) -> Result<(), IntakeError>;
}
