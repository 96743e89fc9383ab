//! Rendering helpers: template renderer, flash messages, and translations.

pub mod flash;
pub mod messages;
pub mod renderer;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use crudhub_core::result::AppResult;

use crate::state::AppState;

pub use flash::{Flash, FlashMessage};
pub use renderer::TemplateRenderer;

/// Render a full page, consuming any pending flash messages into it.
///
/// `context` must be a JSON object; a `flashes` key is added.
pub fn page(
    state: &AppState,
    jar: CookieJar,
    view: &str,
    context: Value,
) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flashes) = Flash::take(jar);
    let context = with_flashes(context, flashes)?;
    Ok((jar, state.render(view, context)?))
}

/// Re-render a submitted form that failed validation.
pub fn invalid_form(
    state: &AppState,
    jar: CookieJar,
    view: &str,
    context: Value,
) -> AppResult<Response> {
    let (jar, html) = page(state, jar, view, context)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, html).into_response())
}

fn with_flashes(context: Value, flashes: Vec<FlashMessage>) -> AppResult<Value> {
    let mut context = match context {
        Value::Object(map) => map,
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(crudhub_core::AppError::internal(format!(
                "View context must be an object, got {other}"
            )));
        }
    };
    context.insert("flashes".to_string(), serde_json::to_value(flashes)?);
    Ok(Value::Object(context))
}
