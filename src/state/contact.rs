//! Contact form: required-field validation and mail-client handoff.
//!
//! No message leaves the page. A valid submission becomes a `mailto:` URI
//! with a percent-encoded subject and body; delivery is the mail client's job.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::config::ContactConfig;
use crate::effect::{Effect, Timer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact form field `{0}` is empty")]
    MissingField(ContactField),
}

/// Field values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Every field must be non-empty. Whitespace counts as content.
    ///
    /// # Errors
    ///
    /// Returns the first empty field in form order.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("From: {} ({})\n\nMessage:\n{}", self.name, self.email, self.message)
    }

    #[must_use]
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    config: ContactConfig,
    handoffs: usize,
}

impl ContactForm {
    #[must_use]
    pub fn new(config: &ContactConfig) -> Self {
        Self { config: config.clone(), handoffs: 0 }
    }

    /// Number of mail handoffs issued since load.
    #[must_use]
    pub fn handoffs(&self) -> usize {
        self.handoffs
    }

    pub fn submit(&mut self, submission: &ContactSubmission, out: &mut Vec<Effect>) {
        out.push(Effect::PreventDefault);
        if let Err(e) = submission.validate() {
            log::info!("contact form rejected: {e}");
            out.push(Effect::Alert(self.config.validation_message.clone()));
            return;
        }
        self.handoffs += 1;
        out.push(Effect::Navigate(submission.mailto(&self.config.recipient)));
        out.push(Effect::SetTimeout { timer: Timer::FormReset, delay_ms: self.config.reset_delay_ms });
    }

    pub fn reset(&self, out: &mut Vec<Effect>) {
        out.push(Effect::ResetForm);
        out.push(Effect::Alert(self.config.thank_you_message.clone()));
    }
}
