/// Error type for answer-store mutations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The choice identifier does not belong to the question it was applied
    /// to. The UI cannot produce this, but a library caller can.
    #[error("Unknown choice '{choice}' for question '{question}'")]
    UnknownChoice { question: String, choice: String },

    /// The stored answer does not match the question's kind - two question
    /// values share an identifier but differ in kind.
    #[error("Stored answer for question '{question}' does not match its kind")]
    KindMismatch { question: String },
}
