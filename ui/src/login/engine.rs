//! Login form state machine.
//!
//! ```text
//! Idle --submit--> (validation) --rejected--> Idle (error shown)
//!                        |
//!                        +--ok--> Simulating --finish--> Idle
//! ```
//!
//! Validation is synchronous, so "validating" never outlives a single
//! [`LoginForm::submit`] call. While `Simulating`, further submits are ignored.

use thiserror::Error;

use crate::core::auth::Credentials;
use crate::core::phone::{normalize_phone, validate_phone};
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Simulating,
}

/// User-facing login failures. The view maps each to a localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("phone number and password are required")]
    EmptyFields,
    #[error("phone number is not in international format")]
    InvalidPhone,
    #[error("sign-in failed")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was started.
    Rejected(LoginError),
    /// Validation passed; the caller must run the sign-in and report back via [`LoginForm::finish`].
    Started(Credentials),
    /// A sign-in is already in flight.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    NavigateToDashboard(Session),
    Failed(LoginError),
    /// No sign-in was in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
    pub phase: LoginPhase,
    pub error: Option<LoginError>,
    pub show_password: bool,
}

impl LoginForm {
    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Simulating
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        if let Err(err) = self.validate() {
            self.error = Some(err);
            return SubmitOutcome::Rejected(err);
        }

        self.error = None;
        self.phase = LoginPhase::Simulating;
        SubmitOutcome::Started(Credentials {
            phone: normalize_phone(&self.phone),
            password: self.password.clone(),
        })
    }

    /// Settle the in-flight sign-in. The password is dropped either way.
    pub fn finish(&mut self, result: Result<Session, LoginError>) -> Completion {
        if !self.is_submitting() {
            return Completion::Ignored;
        }

        self.phase = LoginPhase::Idle;
        self.password.clear();
        match result {
            Ok(session) => Completion::NavigateToDashboard(session),
            Err(err) => {
                self.error = Some(err);
                Completion::Failed(err)
            }
        }
    }

    fn validate(&self) -> Result<(), LoginError> {
        if self.phone.trim().is_empty() || self.password.is_empty() {
            return Err(LoginError::EmptyFields);
        }
        if !validate_phone(&self.phone) {
            return Err(LoginError::InvalidPhone);
        }
        Ok(())
    }
}
