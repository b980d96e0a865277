use serde::Serialize;

/// Identifier of a feature on the voting board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Create a feature identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A votable improvement suggestion on the feature board.
///
/// The vote count reflects a fixed baseline plus the net effect (±1) of the
/// current session's own toggle; nothing else mutates it. State is
/// session-local and discarded on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    id: FeatureId,
    title: String,
    description: String,
    category: String,
    votes: u32,
    has_voted: bool,
}

impl Feature {
    /// Create a seeded feature with a baseline vote count.
    pub fn new(
        id: impl Into<FeatureId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        votes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            votes,
            has_voted: false,
        }
    }

    /// Create a freshly suggested feature: one vote, cast by the suggester.
    pub fn suggested(
        id: FeatureId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            votes: 1,
            has_voted: true,
        }
    }

    /// Get the feature identifier.
    pub fn id(&self) -> &FeatureId {
        &self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the current vote count.
    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Whether the current session has voted for this feature.
    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    /// Apply the session's vote toggle: +1 when voting, -1 when retracting.
    pub fn toggle_vote(&mut self) {
        if self.has_voted {
            self.votes = self.votes.saturating_sub(1);
        } else {
            self.votes += 1;
        }
        self.has_voted = !self.has_voted;
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_vote_round_trips() {
        let mut feature = Feature::new("1", "Streaks", "Habit streaks", "Tracking", 42);

        feature.toggle_vote();
        assert_eq!(feature.votes(), 43);
        assert!(feature.has_voted());

        feature.toggle_vote();
        assert_eq!(feature.votes(), 42);
        assert!(!feature.has_voted());
    }

    #[test]
    fn suggested_feature_starts_voted() {
        let feature = Feature::suggested(
            FeatureId::new("abc"),
            "Dark mode",
            "Easier on the eyes",
            "Community",
        );
        assert_eq!(feature.votes(), 1);
        assert!(feature.has_voted());
    }
}
