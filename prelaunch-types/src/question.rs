/// A single question in the pre-launch survey.
///
/// Questions are immutable once constructed and live in a fixed order inside
/// a survey definition. The section label is used purely for progress
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique identifier, used as the key in the answer store.
    id: String,

    /// The prompt text shown to the user.
    text: String,

    /// The kind of question (determines selection semantics).
    kind: QuestionKind,

    /// The section this question belongs to (progress display only).
    section: Section,

    /// The selectable choices, in display order.
    choices: Vec<Choice>,
}

impl Question {
    /// Create a single-select question.
    pub fn single(
        id: impl Into<String>,
        text: impl Into<String>,
        section: Section,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::Single,
            section,
            choices,
        }
    }

    /// Create a multi-select question with no selection cap.
    pub fn multi(
        id: impl Into<String>,
        text: impl Into<String>,
        section: Section,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::Multi { max: None },
            section,
            choices,
        }
    }

    /// Create a multi-select question requiring exactly `max` selections.
    pub fn multi_exact(
        id: impl Into<String>,
        text: impl Into<String>,
        max: usize,
        section: Section,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::Multi { max: Some(max) },
            section,
            choices,
        }
    }

    /// Get the question identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the section this question belongs to.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Get the choices, in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up a choice by identifier.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }
}

/// The kind of question, determining how selections are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one choice; re-selecting replaces the stored answer.
    Single,

    /// Any number of choices, toggled on and off. If `max` is set, the
    /// selection count may never exceed it, and the completion gate requires
    /// exactly `max` selections.
    Multi { max: Option<usize> },
}

impl QuestionKind {
    /// Check whether this is a multi-select kind.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi { .. })
    }

    /// The declared selection cap, if any.
    pub fn max_selections(&self) -> Option<usize> {
        match self {
            Self::Single => None,
            Self::Multi { max } => *max,
        }
    }
}

/// One selectable choice belonging to a question.
///
/// Description and icon are presentation hints with no behavioral weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: String,
    label: String,
    description: Option<String>,
    icon: Option<String>,
}

impl Choice {
    /// Create a new choice with the given identifier and display label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: None,
        }
    }

    /// Attach a short description shown under the label.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an icon hint.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Get the choice identifier (unique within its parent question).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the icon hint, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// A section badge for progress display ("Feature Requests", 2 of 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    number: usize,
    total: usize,
}

impl Section {
    /// Create a new section badge.
    pub fn new(name: impl Into<String>, number: usize, total: usize) -> Self {
        Self {
            name: name.into(),
            number,
            total,
        }
    }

    /// Get the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the 1-based section number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Get the total number of sections.
    pub fn total(&self) -> usize {
        self.total
    }
}
