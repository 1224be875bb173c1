//! Contact form validation and relay submission.

use leptos::logging;
use platform_host::{HttpService, TimerService};
use serde::Serialize;
use thiserror::Error;

/// How long the success banner stays visible.
pub const CONTACT_SUCCESS_DISMISS_MS: u32 = 5_000;

/// Contact form contents, serialized as the relay request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// [`ContactForm::name`]
    Name,
    /// [`ContactForm::email`]
    Email,
    /// [`ContactForm::message`]
    Message,
}

impl ContactField {
    /// Field label used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Contact submission failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A field is blank or malformed.
    #[error("invalid {}", .field.label())]
    Invalid {
        /// Offending field.
        field: ContactField,
    },
    /// The request did not complete.
    #[error("contact relay unreachable: {0}")]
    Transport(String),
    /// The relay answered with a non-2xx status.
    #[error("contact relay rejected the message with status {status}")]
    Rejected {
        /// HTTP status.
        status: u16,
    },
}

impl ContactForm {
    /// Checks that every field is filled in and the email looks like `local@domain`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: ContactField::Name,
            });
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::Invalid {
                field: ContactField::Email,
            });
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: ContactField::Message,
            });
        }
        Ok(())
    }

    /// Replaces one field.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Validates `form` and posts it to `relay_url` as JSON.
///
/// # Errors
///
/// Returns [`ContactError`] for invalid input, transport failures, or non-2xx responses.
pub async fn submit_contact(
    http: &dyn HttpService,
    relay_url: &str,
    form: &ContactForm,
) -> Result<(), ContactError> {
    form.validate()?;
    let body =
        serde_json::to_string(form).map_err(|err| ContactError::Transport(err.to_string()))?;
    let response = http.post_json(relay_url, &body).await.map_err(|err| {
        logging::warn!("contact relay request failed: {err}");
        ContactError::Transport(err)
    })?;
    if !response.is_success() {
        logging::warn!("contact relay returned status {}", response.status);
        return Err(ContactError::Rejected {
            status: response.status,
        });
    }
    Ok(())
}

/// Submission banner state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    /// Nothing to show.
    #[default]
    Idle,
    /// A submission is in flight.
    Submitting,
    /// The last submission succeeded.
    Sent,
    /// The last submission failed.
    Failed(String),
}

/// Submits `form` and reports banner transitions through `report`.
///
/// A successful send reports [`ContactStatus::Sent`], waits [`CONTACT_SUCCESS_DISMISS_MS`] on
/// `timers`, then reports [`ContactStatus::Idle`]. A failure reports [`ContactStatus::Failed`]
/// and stays visible.
pub async fn send_contact(
    http: &dyn HttpService,
    timers: &dyn TimerService,
    relay_url: &str,
    form: &ContactForm,
    report: impl Fn(ContactStatus),
) {
    match submit_contact(http, relay_url, form).await {
        Ok(()) => {
            report(ContactStatus::Sent);
            timers.sleep(CONTACT_SUCCESS_DISMISS_MS).await;
            report(ContactStatus::Idle);
        }
        Err(err) => report(ContactStatus::Failed(err.to_string())),
    }
}
