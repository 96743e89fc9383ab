//! Read-only task pages.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crudhub_core::result::AppResult;

use crate::extractors::RecordIdPath;
use crate::state::AppState;
use crate::view;

/// GET /task/
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let tasks = state.tasks.find_all().await?;
    let (jar, html) = view::page(&state, jar, "task/index", json!({ "tasks": tasks }))?;
    Ok((jar, html).into_response())
}

/// GET /task/{id}
pub async fn show(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
) -> AppResult<Response> {
    let task = state.tasks.get(id).await?;
    let (jar, html) = view::page(&state, jar, "task/view", json!({ "task": task }))?;
    Ok((jar, html).into_response())
}
