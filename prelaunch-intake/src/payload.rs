use serde::{Deserialize, Serialize};

/// A waitlist signup as accepted by the waitlist intake.
///
/// Field validation (non-empty name, email shape) happens in the form
/// controller before a signup is constructed for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSignup {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl WaitlistSignup {
    /// Create a signup payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// The role a waitlist signup self-identifies as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Individual,
    Coach,
    TeamLead,
    Healthcare,
    Other,
}

impl Role {
    /// All roles, in the order the signup form offers them.
    pub const ALL: [Role; 5] = [
        Role::Individual,
        Role::Coach,
        Role::TeamLead,
        Role::Healthcare,
        Role::Other,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Individual => "Individual",
            Role::Coach => "Coach / Trainer",
            Role::TeamLead => "Team Lead",
            Role::Healthcare => "Healthcare Professional",
            Role::Other => "Other",
        }
    }
}

/// A new feature suggestion as accepted by the board intake.
///
/// Both fields are required to be non-empty after trimming; the board
/// controller validates before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSuggestion {
    pub title: String,
    pub description: String,
}

impl FeatureSuggestion {
    /// Create a suggestion payload.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
