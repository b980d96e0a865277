//! The stepwise questionnaire engine behind the pre-launch survey.
//!
//! A [`SurveyRunner`] owns the ordered question list, the answer store, a
//! step cursor, and the submission state machine. All survey state flows
//! through it - there are no module-level globals, and mutations are
//! serialized by exclusive ownership.

mod runner;
pub use runner::{StepOutcome, SubmitState, SurveyError, SurveyRunner};
