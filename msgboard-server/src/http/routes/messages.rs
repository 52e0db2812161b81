//! Board endpoints: list page and form submission

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::MessageText;
use crate::view;

/// Submission form body, kept as raw pairs so a repeated field still parses
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct AddMessageForm(pub Vec<(String, String)>);

impl AddMessageForm {
    /// First `message` value in body order, if any.
    pub fn message(self) -> Option<String> {
        self.0
            .into_iter()
            .find(|(key, _)| key == "message")
            .map(|(_, value)| value)
    }
}

/// GET / - render all messages, newest first
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let messages = state
        .store
        .list_messages()
        .await
        .map_err(|e| state.storage_error(e))?;

    Ok(Html(view::render_index(&messages)))
}

/// POST /add - store a message, then send the browser back to the list
///
/// A missing or empty `message` field (or an unreadable form body) is not an
/// error: nothing is stored and the redirect still happens.
async fn add_message(
    State(state): State<Arc<AppState>>,
    form: Result<Form<AddMessageForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let submitted = match form {
        Ok(Form(form)) => form.message(),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable form body");
            None
        }
    };

    let Some(raw) = submitted.filter(|m| !m.is_empty()) else {
        tracing::debug!("empty submission, nothing stored");
        return Ok(Redirect::to("/"));
    };

    let text = MessageText::new(&raw)?;
    let id = state
        .store
        .insert_message(&text)
        .await
        .map_err(|e| state.storage_error(e))?;

    tracing::info!(id, bytes = text.as_str().len(), "message stored");
    Ok(Redirect::to("/"))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_message))
}
