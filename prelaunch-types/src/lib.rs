//! Core types for the ThriveSpace pre-launch engine.
//!
//! This crate provides the foundational types shared by the survey, waitlist,
//! and feature-board flows:
//! - `Question`, `QuestionKind`, `Choice`, `Section` - Survey structure
//! - `Answers` and `AnswerValue` - The answer store and its mutation rules
//! - `Feature` and `FeatureId` - Votable entries on the feature board
//!
//! Everything here is presentation-agnostic and free of I/O. The async
//! boundary lives in `prelaunch-intake`; the flow state machines live in
//! `prelaunch-survey`, `prelaunch-board`, and `prelaunch-waitlist`.

mod question;
pub use question::{Choice, Question, QuestionKind, Section};

mod answers;
pub use answers::{AnswerValue, Answers, Applied};

mod feature;
pub use feature::{Feature, FeatureId};

mod error;
pub use error::AnswerError;
