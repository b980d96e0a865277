//! The asynchronous intake boundary of the pre-launch engine.
//!
//! Every flow (waitlist, survey, feature board) submits to an external
//! intake endpoint. The endpoints are specified only as "accepts a payload,
//! returns success or failure", so the boundary is a set of small async
//! traits the flow controllers hold behind `Arc<dyn _>`:
//!
//! - [`WaitlistIntake`] - waitlist signups
//! - [`SurveyIntake`] - the full answer store, atomically
//! - [`BoardIntake`] - vote toggles and feature suggestions
//!
//! [`MockIntake`] simulates the network with a delay, standing in for a
//! real transport. [`ScriptedIntake`] is a timerless test double that
//! records payloads. [`WithTimeout`] bounds any intake with a deadline.

mod error;
pub use error::IntakeError;

mod payload;
pub use payload::{FeatureSuggestion, Role, WaitlistSignup};

mod traits;
pub use traits::{BoardIntake, SurveyIntake, WaitlistIntake};

mod mock;
pub use mock::{IntakeCall, MockIntake, ScriptedIntake};

mod timeout;
pub use timeout::WithTimeout;
