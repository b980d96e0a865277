use std::collections::HashMap;

use serde::Serialize;

use crate::{AnswerError, Question, QuestionKind};

/// The recorded answer for one question.
///
/// Serializes untagged so the intake wire shape is
/// `{"qid": "choice"}` for single-select and `{"qid": ["a", "b"]}` for
/// multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// The chosen option of a single-select question.
    Single(String),

    /// The chosen options of a multi-select question, in selection order.
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as a single choice identifier.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(id) => Some(id),
            Self::Multi(_) => None,
        }
    }

    /// Try to get this value as a list of choice identifiers.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(ids) => Some(ids),
        }
    }

    /// The number of selected choices this value represents.
    pub fn selected_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(ids) => ids.len(),
        }
    }
}

/// The outcome of applying a choice selection to the answer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The choice was recorded (or, for single-select, re-recorded).
    Selected,

    /// The choice was already selected on a multi-select question and has
    /// been toggled off.
    Deselected,

    /// A multi-select question is at its declared cap; nothing changed.
    /// This is an advisory outcome for a transient notice, not an error.
    AtCapacity,
}

/// The answer store: question identifier to recorded answer.
///
/// Mutated only through [`Answers::apply`], which enforces the selection
/// semantics of each question kind. A `Multi` question with a declared cap
/// never holds more selections than that cap.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the recorded answer for a question.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    /// Check whether a choice is currently selected for a question.
    pub fn is_selected(&self, question_id: &str, choice_id: &str) -> bool {
        match self.values.get(question_id) {
            Some(AnswerValue::Single(id)) => id == choice_id,
            Some(AnswerValue::Multi(ids)) => ids.iter().any(|id| id == choice_id),
            None => false,
        }
    }

    /// The number of choices currently selected for a question.
    pub fn selected_count(&self, question_id: &str) -> usize {
        self.values
            .get(question_id)
            .map_or(0, AnswerValue::selected_count)
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no questions have been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all question-id/answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Discard all recorded answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Apply a choice selection to the store. This is the only write path.
    ///
    /// - `Single`: the stored answer is replaced unconditionally. Re-clicking
    ///   the already-selected choice is idempotent; there is no deselect.
    /// - `Multi`: an already-selected choice is toggled off; otherwise the
    ///   choice is added unless the question's cap is already reached, in
    ///   which case nothing changes and [`Applied::AtCapacity`] is returned.
    ///
    /// Returns an error if `choice_id` does not belong to `question`, or if
    /// the stored answer was recorded under a conflicting question kind.
    pub fn apply(&mut self, question: &Question, choice_id: &str) -> Result<Applied, AnswerError> {
        if question.choice(choice_id).is_none() {
            return Err(AnswerError::UnknownChoice {
                question: question.id().to_string(),
                choice: choice_id.to_string(),
            });
        }

        match question.kind() {
            QuestionKind::Single => {
                self.values.insert(
                    question.id().to_string(),
                    AnswerValue::Single(choice_id.to_string()),
                );
                Ok(Applied::Selected)
            }
            QuestionKind::Multi { max } => {
                let entry = self
                    .values
                    .entry(question.id().to_string())
                    .or_insert_with(|| AnswerValue::Multi(Vec::new()));
                let AnswerValue::Multi(selected) = entry else {
                    return Err(AnswerError::KindMismatch {
                        question: question.id().to_string(),
                    });
                };

                if let Some(position) = selected.iter().position(|id| id == choice_id) {
                    selected.remove(position);
                    if selected.is_empty() {
                        self.values.remove(question.id());
                    }
                    return Ok(Applied::Deselected);
                }

                if let Some(max) = max
                    && selected.len() >= *max
                {
                    return Ok(Applied::AtCapacity);
                }

                selected.push(choice_id.to_string());
                Ok(Applied::Selected)
            }
        }
    }

    /// Whether the completion gate is satisfied for a question.
    ///
    /// - `Single`: an answer is recorded.
    /// - `Multi` with a declared cap `m`: exactly `m` choices are selected
    ///   (not merely at least one).
    /// - `Multi` without a cap: at least one choice is selected.
    pub fn satisfies(&self, question: &Question) -> bool {
        match question.kind() {
            QuestionKind::Single => self.values.contains_key(question.id()),
            QuestionKind::Multi { max: Some(max) } => self.selected_count(question.id()) == *max,
            QuestionKind::Multi { max: None } => self.selected_count(question.id()) > 0,
        }
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, Section};

    fn section() -> Section {
        Section::new("Test", 1, 1)
    }

    fn single_question() -> Question {
        Question::single(
            "color",
            "Favorite color?",
            section(),
            vec![Choice::new("red", "Red"), Choice::new("blue", "Blue")],
        )
    }

    fn capped_multi() -> Question {
        Question::multi_exact(
            "features",
            "Pick exactly 2",
            2,
            section(),
            vec![
                Choice::new("x", "X"),
                Choice::new("y", "Y"),
                Choice::new("z", "Z"),
            ],
        )
    }

    #[test]
    fn single_select_replaces() {
        let question = single_question();
        let mut answers = Answers::new();

        answers.apply(&question, "red").unwrap();
        answers.apply(&question, "blue").unwrap();

        assert_eq!(answers.get("color").unwrap().as_single(), Some("blue"));
    }

    #[test]
    fn single_reselect_is_idempotent() {
        let question = single_question();
        let mut answers = Answers::new();

        answers.apply(&question, "red").unwrap();
        let before = answers.get("color").cloned();
        let applied = answers.apply(&question, "red").unwrap();

        assert_eq!(applied, Applied::Selected);
        assert_eq!(answers.get("color").cloned(), before);
    }

    #[test]
    fn multi_toggle_off_restores_prior_state() {
        let question = capped_multi();
        let mut answers = Answers::new();

        answers.apply(&question, "x").unwrap();
        let before = answers.get("features").cloned();

        answers.apply(&question, "y").unwrap();
        let applied = answers.apply(&question, "y").unwrap();

        assert_eq!(applied, Applied::Deselected);
        assert_eq!(answers.get("features").cloned(), before);
    }

    #[test]
    fn multi_toggle_from_empty_is_involution() {
        let question = capped_multi();
        let mut answers = Answers::new();

        answers.apply(&question, "x").unwrap();
        answers.apply(&question, "x").unwrap();

        assert!(answers.get("features").is_none());
        assert!(answers.is_empty());
    }

    #[test]
    fn cap_never_exceeded_under_any_toggle_sequence() {
        let question = capped_multi();
        let mut answers = Answers::new();

        // Arbitrary churn: toggles, repeats, attempts past the cap.
        for choice in ["x", "y", "z", "x", "z", "y", "x", "z", "z", "y"] {
            answers.apply(&question, choice).unwrap();
            assert!(answers.selected_count("features") <= 2);
        }
    }

    #[test]
    fn selection_at_cap_is_rejected_without_change() {
        let question = capped_multi();
        let mut answers = Answers::new();

        answers.apply(&question, "x").unwrap();
        answers.apply(&question, "y").unwrap();
        let applied = answers.apply(&question, "z").unwrap();

        assert_eq!(applied, Applied::AtCapacity);
        assert_eq!(
            answers.get("features").unwrap().as_multi(),
            Some(&["x".to_string(), "y".to_string()][..])
        );
    }

    #[test]
    fn gate_requires_exact_count_for_capped_multi() {
        let question = capped_multi();
        let mut answers = Answers::new();

        assert!(!answers.satisfies(&question));
        answers.apply(&question, "x").unwrap();
        assert!(!answers.satisfies(&question));
        answers.apply(&question, "y").unwrap();
        assert!(answers.satisfies(&question));
    }

    #[test]
    fn gate_for_uncapped_multi_needs_any_selection() {
        let question = Question::multi(
            "topics",
            "Pick any",
            section(),
            vec![Choice::new("a", "A"), Choice::new("b", "B")],
        );
        let mut answers = Answers::new();

        assert!(!answers.satisfies(&question));
        answers.apply(&question, "a").unwrap();
        assert!(answers.satisfies(&question));
        answers.apply(&question, "b").unwrap();
        assert!(answers.satisfies(&question));
    }

    #[test]
    fn gate_for_single_tracks_presence() {
        let question = single_question();
        let mut answers = Answers::new();

        assert!(!answers.satisfies(&question));
        answers.apply(&question, "red").unwrap();
        assert!(answers.satisfies(&question));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let question = single_question();
        let mut answers = Answers::new();

        let result = answers.apply(&question, "green");
        assert!(matches!(result, Err(AnswerError::UnknownChoice { .. })));
        assert!(answers.is_empty());
    }

    #[test]
    fn conflicting_question_kinds_are_an_error_not_a_panic() {
        let single = single_question();
        // Same identifier, different kind.
        let multi = Question::multi(
            "color",
            "Pick any colors",
            section(),
            vec![Choice::new("red", "Red"), Choice::new("blue", "Blue")],
        );
        let mut answers = Answers::new();

        answers.apply(&single, "red").unwrap();
        let result = answers.apply(&multi, "blue");

        assert!(matches!(result, Err(AnswerError::KindMismatch { .. })));
        assert_eq!(answers.get("color").unwrap().as_single(), Some("red"));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let mut answers = Answers::new();
        answers.apply(&single_question(), "red").unwrap();
        answers.apply(&capped_multi(), "x").unwrap();
        answers.apply(&capped_multi(), "y").unwrap();

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["color"], serde_json::json!("red"));
        assert_eq!(json["features"], serde_json::json!(["x", "y"]));
    }
}
