use serde::Serialize;

/// A contact message ready to be written to the `messages` table.
///
/// Every field is trimmed and non-empty. The only way to obtain one is
/// through `contact::validation::validate_draft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewMessage {
    pub(crate) fn from_validated(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            subject,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
