use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::contact::form::{ContactForm, Draft, Field, SubmissionError, SubmissionStatus};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.render(&ContactForm::new())?))
}

/// POST /contact
/// Replays the posted fields into a fresh form, submits it and re-renders the
/// page with the outcome. The form is cleared on success and keeps the posted
/// values otherwise. Unknown field names are ignored.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let mut form = ContactForm::new();
    for (name, value) in fields {
        match name.parse::<Field>() {
            Ok(field) => form.update_field(field, value),
            Err(e) => debug!("Ignoring posted value: {e}"),
        }
    }

    let status = match form.submit(state.store.as_ref()).await {
        SubmissionStatus::Error(SubmissionError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionStatus::Error(SubmissionError::Store(_)) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    let html = state.pages.render(&form)?;
    Ok((status, Html(html)).into_response())
}

/// POST /api/v1/messages
pub async fn handle_create_message(
    State(state): State<AppState>,
    Json(draft): Json<Draft>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut form = ContactForm::from_draft(draft);
    match form.submit(state.store.as_ref()).await.clone() {
        SubmissionStatus::Error(e) => Err(e.into()),
        status => Ok((StatusCode::CREATED, Json(json!({ "status": status.tag() })))),
    }
}
