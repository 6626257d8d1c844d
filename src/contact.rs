use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::notice::Notice;

pub const ERROR_BORDER: &str = "border-color: #ef4444;";
pub const SUCCESS_MESSAGE: &str = "Your message was sent successfully!";
pub const FAILURE_MESSAGE: &str = "Something went wrong while sending. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        Field::ALL.map(|field| (field.as_str(), self.get(field)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

// Matches the browser's string length, which counts UTF-16 units.
fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut inner = domain.chars();
    inner.next();
    inner.next_back();
    inner.as_str().contains('.')
}

pub fn validate(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if trimmed_len(&fields.name) < 2 {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name must be at least 2 characters",
        });
    }

    if !is_plausible_email(&fields.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }

    if trimmed_len(&fields.subject) < 3 {
        errors.push(FieldError {
            field: Field::Subject,
            message: "Subject must be at least 3 characters",
        });
    }

    if trimmed_len(&fields.message) < 10 {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message must be at least 10 characters",
        });
    }

    errors
}

pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send message",
            Self::Pending => "Sending...",
            Self::Sent => "Sent!",
            Self::Failed => "Failed to send",
        }
    }

    pub fn disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn style(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("background: #10b981;"),
            Self::Failed => Some("background: #ef4444;"),
            Self::Idle | Self::Pending => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
}

#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, endpoint: &Url, fields: &ContactFields) -> Result<u16, SubmitError>;
}

#[derive(Debug, Default, Deserialize)]
pub struct EndpointReply {
    #[serde(default)]
    pub errors: Vec<EndpointReplyError>,
}

#[derive(Debug, Deserialize)]
pub struct EndpointReplyError {
    pub message: String,
}

pub fn reply_error_summary(body: &str) -> Option<String> {
    let reply = serde_json::from_str::<EndpointReply>(body).ok()?;
    let messages: Vec<_> = reply
        .errors
        .into_iter()
        .map(|error| error.message)
        .filter(|message| !message.trim().is_empty())
        .collect();

    (!messages.is_empty()).then(|| messages.join("; "))
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
    Settled {
        state: SubmitState,
        notice: Notice,
        reset_form: bool,
    },
    Restored,
}

pub async fn run_submission<T, S, Fut, E>(
    transport: &T,
    endpoint: &Url,
    fields: &ContactFields,
    restore_after: Duration,
    sleep: S,
    mut emit: E,
) -> Result<(), SubmitError>
where
    T: FormTransport,
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    E: FnMut(SubmissionEvent),
{
    let result = transport
        .post_form(endpoint, fields)
        .await
        .and_then(check_status);

    let settled = match &result {
        Ok(()) => SubmissionEvent::Settled {
            state: SubmitState::Sent,
            notice: Notice::success(SUCCESS_MESSAGE),
            reset_form: true,
        },
        Err(_) => SubmissionEvent::Settled {
            state: SubmitState::Failed,
            notice: Notice::error(FAILURE_MESSAGE),
            reset_form: false,
        },
    };
    emit(settled);

    sleep(restore_after).await;
    emit(SubmissionEvent::Restored);

    result
}
