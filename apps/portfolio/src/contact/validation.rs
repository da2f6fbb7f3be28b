use thiserror::Error;

use crate::contact::form::{Draft, Field};
use crate::models::message::NewMessage;

/// One or more required fields were empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required fields are empty: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates a draft for submission.
///
/// PASS: all four fields contain something other than whitespace.
/// The returned message carries the trimmed values.
///
/// FAIL: every empty field is reported, in `Field::ALL` order.
///
/// The email field is only checked for presence; format is left to the
/// browser's `type="email"` hint.
pub fn validate_draft(draft: &Draft) -> Result<NewMessage, ValidationError> {
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|&field| draft.get(field).trim().is_empty())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    Ok(NewMessage::from_validated(
        draft.name.trim().to_string(),
        draft.email.trim().to_string(),
        draft.subject.trim().to_string(),
        draft.message.trim().to_string(),
    ))
}
