//! The waitlist signup form.
//!
//! A [`WaitlistForm`] collects name, email, and role, validates them
//! synchronously (errors are per-field, for inline display next to the
//! offending control), and submits through a [`WaitlistIntake`] with the
//! same idle/submitting/joined controller the survey uses.
//!
//! [`WaitlistIntake`]: prelaunch_intake::WaitlistIntake

mod form;
pub use form::{FieldError, FormState, WaitlistError, WaitlistForm};
