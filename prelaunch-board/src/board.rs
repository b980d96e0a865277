use std::collections::HashSet;
use std::sync::Arc;

use prelaunch_intake::{BoardIntake, FeatureSuggestion, IntakeError};
use prelaunch_types::{Feature, FeatureId};
use uuid::Uuid;

/// Category assigned to user-suggested features.
pub const DEFAULT_CATEGORY: &str = "Community";

/// Error type for feature-board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A vote confirmation for this feature is already in flight; the
    /// board-level analogue of the disabled vote button.
    #[error("A vote for feature '{0}' is already pending")]
    VotePending(FeatureId),

    /// No feature with this identifier exists on the board.
    #[error("Unknown feature '{0}'")]
    UnknownFeature(FeatureId),

    /// Suggestion validation failed: title and description are both
    /// required after trimming. Nothing was saved.
    #[error("Please fill in both title and description")]
    MissingFields,

    /// The intake rejected the call. Any optimistic mutation has been
    /// rolled back; the caller may retry.
    #[error(transparent)]
    Intake(#[from] IntakeError),
}

/// The session-local feature board.
///
/// Seeded from a fixture list at construction; suggested features are
/// prepended at runtime. All state is discarded with the session - the
/// intake is the only outward channel.
pub struct FeatureBoard {
    features: Vec<Feature>,
    pending: HashSet<FeatureId>,
    intake: Arc<dyn BoardIntake>,
}

impl FeatureBoard {
    /// Create a board seeded with the given features.
    pub fn new(features: Vec<Feature>, intake: Arc<dyn BoardIntake>) -> Self {
        Self {
            features,
            pending: HashSet::new(),
            intake,
        }
    }

    /// The features in insertion order (suggestions first).
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The features ranked by vote count, highest first.
    pub fn ranked(&self) -> Vec<&Feature> {
        let mut ranked: Vec<&Feature> = self.features.iter().collect();
        ranked.sort_by(|a, b| b.votes().cmp(&a.votes()));
        ranked
    }

    /// Look up a feature by identifier.
    pub fn feature(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id() == id)
    }

    /// Whether a vote confirmation for this feature is in flight.
    pub fn is_pending(&self, id: &FeatureId) -> bool {
        self.pending.contains(id)
    }

    /// Toggle the session's vote on a feature.
    ///
    /// The count and `has_voted` flag flip immediately; the intake call then
    /// confirms the toggle. On failure the feature is restored to its exact
    /// pre-toggle snapshot and the error is returned for a retry message.
    ///
    /// Equivalent to [`begin_toggle`](Self::begin_toggle) followed by
    /// [`finish_toggle`](Self::finish_toggle) around an inline await. A UI
    /// driver that keeps the board responsive while the confirmation is in
    /// flight calls the two phases itself.
    pub async fn toggle_vote(&mut self, id: &FeatureId) -> Result<(), BoardError> {
        let snapshot = self.begin_toggle(id)?;
        let confirmed = self.intake.clone().toggle_vote(id).await;
        self.finish_toggle(snapshot, confirmed)
    }

    /// First phase of a vote toggle: apply the optimistic flip and mark the
    /// feature pending.
    ///
    /// Returns the pre-toggle snapshot to hand back to
    /// [`finish_toggle`](Self::finish_toggle) once the intake call settles.
    /// While the feature is pending, further toggles on it are rejected with
    /// [`BoardError::VotePending`] - at most one mutation is in flight per
    /// feature.
    pub fn begin_toggle(&mut self, id: &FeatureId) -> Result<Feature, BoardError> {
        if self.pending.contains(id) {
            return Err(BoardError::VotePending(id.clone()));
        }
        let index = self
            .features
            .iter()
            .position(|f| f.id() == id)
            .ok_or_else(|| BoardError::UnknownFeature(id.clone()))?;

        let snapshot = self.features[index].clone();
        self.features[index].toggle_vote();
        self.pending.insert(id.clone());
        tracing::debug!(
            feature = %id,
            votes = self.features[index].votes(),
            "optimistic vote applied"
        );
        Ok(snapshot)
    }

    /// Second phase of a vote toggle: settle the pending flag with the
    /// intake outcome.
    ///
    /// On failure the feature is restored to the snapshot taken by
    /// [`begin_toggle`](Self::begin_toggle); on success the optimistic value
    /// stands as confirmed.
    pub fn finish_toggle(
        &mut self,
        snapshot: Feature,
        confirmed: Result<(), IntakeError>,
    ) -> Result<(), BoardError> {
        let id = snapshot.id().clone();
        self.pending.remove(&id);

        if let Err(error) = confirmed {
            if let Some(index) = self.features.iter().position(|f| f.id() == &id) {
                self.features[index] = snapshot;
            }
            tracing::warn!(feature = %id, %error, "vote rejected, rolled back");
            return Err(error.into());
        }
        Ok(())
    }

    /// Submit a new feature suggestion.
    ///
    /// Both fields must be non-empty after trimming; validation failure
    /// blocks the intake call entirely (no partial save). On acceptance the
    /// feature is prepended with one vote, cast by the suggester.
    pub async fn suggest(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<&Feature, BoardError> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(BoardError::MissingFields);
        }

        let suggestion = FeatureSuggestion::new(title, description);
        self.intake.suggest_feature(&suggestion).await?;

        let feature = Feature::suggested(
            FeatureId::new(Uuid::new_v4().to_string()),
            title,
            description,
            DEFAULT_CATEGORY,
        );
        tracing::info!(feature = %feature.id(), title, "suggestion accepted");
        self.features.insert(0, feature);
        Ok(&self.features[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prelaunch_intake::ScriptedIntake;

    fn seeded(intake: Arc<dyn BoardIntake>) -> FeatureBoard {
        FeatureBoard::new(
            vec![
                Feature::new("1", "Habit Streaks", "Streak counters", "Tracking", 42),
                Feature::new("2", "Challenges", "Group challenges", "Community", 38),
            ],
            intake,
        )
    }

    #[tokio::test]
    async fn ranked_sorts_by_votes_descending() {
        let mut board = seeded(Arc::new(ScriptedIntake::new()));
        let underdog = FeatureId::new("2");

        board.toggle_vote(&underdog).await.unwrap();
        // 42 vs 39: order unchanged.
        assert_eq!(board.ranked()[0].id().as_str(), "1");

        for _ in 0..2 {
            board.toggle_vote(&underdog).await.unwrap();
        }
        // Net effect of an odd toggle count is still +1; ordering is stable
        // under the session's own churn.
        assert_eq!(board.feature(&underdog).unwrap().votes(), 39);
    }

    #[tokio::test]
    async fn unknown_feature_is_rejected() {
        let mut board = seeded(Arc::new(ScriptedIntake::new()));
        let result = board.toggle_vote(&FeatureId::new("nope")).await;
        assert!(matches!(result, Err(BoardError::UnknownFeature(_))));
    }

    #[tokio::test]
    async fn suggestion_requires_both_fields() {
        let intake = Arc::new(ScriptedIntake::new());
        let mut board = seeded(intake.clone());

        let result = board.suggest("  ", "A description").await;
        assert!(matches!(result, Err(BoardError::MissingFields)));
        let result = board.suggest("A title", "\t").await;
        assert!(matches!(result, Err(BoardError::MissingFields)));

        // Validation failures never reach the intake.
        assert!(intake.calls().is_empty());
        assert_eq!(board.features().len(), 2);
    }
}
