//! Security CRUD pages.
//!
//! Every mutation follows Post/Redirect/Get: on success it queues a flash
//! message and answers `303 See Other` to the list page.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use tracing::{debug, info};

use crudhub_core::result::AppResult;
use crudhub_core::types::{PageRequest, paginate};
use crudhub_entity::Security;

use crate::dto::{FieldErrors, FormView, SecurityForm, form_level_error, validate_form};
use crate::extractors::{PageQuery, RecordIdPath};
use crate::state::AppState;
use crate::view::{self, Flash};

const LIST_PATH: &str = "/security/";

fn edit_action(security: &Security) -> String {
    format!("/security/{}/edit", display_id(security))
}

fn delete_action(security: &Security) -> String {
    format!("/security/{}/delete", display_id(security))
}

fn display_id(security: &Security) -> String {
    security.id.map(|id| id.to_string()).unwrap_or_default()
}

/// Normalized, valid submitted values. On failure returns what to
/// re-render: the submitted values, or `fallback` if the body could not be
/// decoded, together with the errors.
fn submitted(
    form: Result<Form<SecurityForm>, FormRejection>,
    fallback: SecurityForm,
) -> Result<SecurityForm, (SecurityForm, FieldErrors)> {
    let form = match form {
        Ok(Form(form)) => form.normalized(),
        Err(rejection) => {
            debug!(error = %rejection, "Undecodable security form");
            return Err((
                fallback,
                form_level_error("The submitted form could not be read."),
            ));
        }
    };

    match validate_form(&form) {
        Ok(()) => Ok(form),
        Err(errors) => Err((form, errors)),
    }
}

/// GET /security/
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let request = PageRequest::new(query.page(), Security::NUMBER_OF_ITEMS);
    let pagination = paginate(&state.securities.query_all(), request).await?;
    let page_numbers = pagination.page_numbers();

    let (jar, html) = view::page(
        &state,
        jar,
        "security/index",
        json!({ "pagination": pagination, "page_numbers": page_numbers }),
    )?;
    Ok((jar, html).into_response())
}

/// GET /security/{id}
pub async fn show(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
) -> AppResult<Response> {
    let security = state.securities.get(id).await?;
    let (jar, html) = view::page(&state, jar, "security/view", json!({ "security": security }))?;
    Ok((jar, html).into_response())
}

/// GET /security/new
pub async fn new_form(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let form = FormView::new(SecurityForm::default(), "POST", "/security/new");
    let (jar, html) = view::page(&state, jar, "security/new", json!({ "form": form }))?;
    Ok((jar, html).into_response())
}

/// POST /security/new
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<SecurityForm>, FormRejection>,
) -> AppResult<Response> {
    let form = match submitted(form, SecurityForm::default()) {
        Ok(form) => form,
        Err((values, errors)) => {
            let form = FormView::new(values, "POST", "/security/new").with_errors(errors);
            return view::invalid_form(&state, jar, "security/new", json!({ "form": form }));
        }
    };

    let security = state.securities.save(form.into_security()).await?;
    info!(id = %display_id(&security), "Security created");

    let jar = Flash::add(jar, "success", "message.created_successfully");
    Ok((jar, Redirect::to(LIST_PATH)).into_response())
}

/// GET /security/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
) -> AppResult<Response> {
    let security = state.securities.get(id).await?;
    let form = FormView::new(SecurityForm::from(&security), "PUT", edit_action(&security));
    let (jar, html) = view::page(
        &state,
        jar,
        "security/edit",
        json!({ "security": security, "form": form }),
    )?;
    Ok((jar, html).into_response())
}

/// PUT /security/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
    form: Result<Form<SecurityForm>, FormRejection>,
) -> AppResult<Response> {
    let mut security = state.securities.get(id).await?;

    let form = match submitted(form, SecurityForm::from(&security)) {
        Ok(form) => form,
        Err((values, errors)) => {
            let form = FormView::new(values, "PUT", edit_action(&security)).with_errors(errors);
            return view::invalid_form(
                &state,
                jar,
                "security/edit",
                json!({ "security": security, "form": form }),
            );
        }
    };

    form.apply_to(&mut security);
    state.securities.save(security).await?;
    info!(id = %id, "Security updated");

    let jar = Flash::add(jar, "success", "message.updated_successfully");
    Ok((jar, Redirect::to(LIST_PATH)).into_response())
}

/// GET /security/{id}/delete
pub async fn delete_form(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
) -> AppResult<Response> {
    let security = state.securities.get(id).await?;
    let form = FormView::new(
        SecurityForm::from(&security),
        "DELETE",
        delete_action(&security),
    );
    let (jar, html) = view::page(
        &state,
        jar,
        "security/delete",
        json!({ "security": security, "form": form }),
    )?;
    Ok((jar, html).into_response())
}

/// DELETE /security/{id}/delete
pub async fn destroy(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    jar: CookieJar,
) -> AppResult<Response> {
    let security = state.securities.get(id).await?;
    state.securities.delete(&security).await?;
    info!(id = %id, "Security deleted");

    let jar = Flash::add(jar, "success", "message.deleted_successfully");
    Ok((jar, Redirect::to(LIST_PATH)).into_response())
}
