use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::contact::validation::{validate_draft, ValidationError};
use crate::store::MessageStore;

/// The four contact form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The HTML `name` attribute and JSON key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The in-progress message as typed by the visitor. Values are kept
/// verbatim; trimming happens at validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Draft {
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
}

/// Why a submit attempt ended in `Error`. Either way the visitor only sees
/// the generic failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store write failed: {0}")]
    Store(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmissionError),
}

impl SubmissionStatus {
    /// Short tag used by templates and JSON responses.
    pub fn tag(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }

    fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error(_))
    }
}

/// Draft plus status for one visitor interaction.
///
/// States: Idle -> Submitting -> Success | Error. A settled status drops
/// back to Idle on the next edit or submit.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: Draft,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with what the visitor posted.
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            draft,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Overwrites one field. Never validates, never fails.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
        }
        self.draft.set(field, value.into());
    }

    /// Validates and writes the draft to the store.
    ///
    /// - Any field blank after trim: `Error(Validation)`, the store is not called.
    /// - Store accepts: `Success`, all fields cleared.
    /// - Store fails: `Error(Store)`, fields kept as typed. No retry.
    ///
    /// Each call makes at most one insert; submitting the same draft twice
    /// stores two rows.
    pub async fn submit(&mut self, store: &dyn MessageStore) -> &SubmissionStatus {
        self.status = SubmissionStatus::Idle;

        let message = match validate_draft(&self.draft) {
            Ok(message) => message,
            Err(e) => {
                warn!("Contact submission rejected: {e}");
                self.status = SubmissionStatus::Error(e.into());
                return &self.status;
            }
        };

        self.status = SubmissionStatus::Submitting;
        debug!("Submitting contact message via {} store", store.backend());

        match store.insert(&message).await {
            Ok(()) => {
                info!("Contact message stored");
                self.draft = Draft::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                error!("Error saving message: {e}");
                self.status = SubmissionStatus::Error(SubmissionError::Store(e.to_string()));
            }
        }

        &self.status
    }
}
