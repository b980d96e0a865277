use std::sync::Arc;

use prelaunch_intake::{IntakeError, Role, WaitlistIntake, WaitlistSignup};

/// A single field-level validation failure, shown inline next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    MissingName,

    #[error("Enter a valid email (e.g., you@example.com)")]
    InvalidEmail,

    #[error("Please choose a role")]
    MissingRole,
}

impl FieldError {
    /// The form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::InvalidEmail => "email",
            Self::MissingRole => "role",
        }
    }
}

/// Error type for waitlist submission.
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    /// One or more fields failed validation; nothing was submitted.
    #[error("Some fields need attention")]
    Invalid(Vec<FieldError>),

    /// The form already submitted successfully; fields are frozen.
    #[error("Already on the waitlist")]
    AlreadyJoined,

    /// The intake rejected the signup; the form is back in idle for retry.
    #[error(transparent)]
    Intake(#[from] IntakeError),
}

/// The signup controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Interactive; fields may change.
    Idle,

    /// The intake call is in flight.
    Submitting,

    /// Terminal; the signup was accepted.
    Joined,
}

/// The waitlist signup form.
pub struct WaitlistForm {
    name: String,
    email: String,
    role: Option<Role>,
    state: FormState,
    last_error: Option<String>,
    intake: Arc<dyn WaitlistIntake>,
}

impl WaitlistForm {
    /// Create an empty form.
    pub fn new(intake: Arc<dyn WaitlistIntake>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: None,
            state: FormState::Idle,
            last_error: None,
            intake,
        }
    }

    /// Set the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the role selector.
    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// The name field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email field.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The selected role, if any.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The signup controller's state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The message of the last failed submission, until the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Validate all fields, returning the signup payload or every failure
    /// at once (for simultaneous inline display).
    pub fn validate(&self) -> Result<WaitlistSignup, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::MissingName);
        }
        let email = self.email.trim();
        if !is_email_shaped(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.role.is_none() {
            errors.push(FieldError::MissingRole);
        }

        match self.role {
            Some(role) if errors.is_empty() => Ok(WaitlistSignup::new(name, email, role)),
            _ => Err(errors),
        }
    }

    /// Validate and submit the signup.
    ///
    /// Validation failure blocks the intake call entirely. An intake failure
    /// returns the form to idle with the error recorded; field contents are
    /// preserved for a manual retry.
    pub async fn submit(&mut self) -> Result<(), WaitlistError> {
        if self.state == FormState::Joined {
            return Err(WaitlistError::AlreadyJoined);
        }
        let signup = self.validate().map_err(WaitlistError::Invalid)?;

        self.state = FormState::Submitting;
        self.last_error = None;
        tracing::debug!(email = %signup.email, "submitting waitlist signup");

        match self.intake.join_waitlist(&signup).await {
            Ok(()) => {
                self.state = FormState::Joined;
                tracing::info!("waitlist signup accepted");
                Ok(())
            }
            Err(error) => {
                self.state = FormState::Idle;
                self.last_error = Some(error.to_string());
                tracing::warn!(%error, "waitlist signup failed");
                Err(error.into())
            }
        }
    }
}

/// Light RFC-shaped email check: something before an '@', and a dot in the
/// domain part.
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
