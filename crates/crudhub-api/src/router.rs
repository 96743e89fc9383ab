//! Route definitions for the CrudHub pages.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the page router with every route and the 404 fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(security_routes())
        .merge(task_routes())
        .merge(health_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Security CRUD: list, view, new, edit, delete
fn security_routes() -> Router<AppState> {
    Router::new()
        .route("/security", get(handlers::security::index))
        .route("/security/", get(handlers::security::index))
        .route(
            "/security/new",
            get(handlers::security::new_form).post(handlers::security::create),
        )
        .route("/security/{id}", get(handlers::security::show))
        .route(
            "/security/{id}/edit",
            get(handlers::security::edit_form).put(handlers::security::update),
        )
        .route(
            "/security/{id}/delete",
            get(handlers::security::delete_form).delete(handlers::security::destroy),
        )
}

/// Read-only task pages
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/task", get(handlers::task::index))
        .route("/task/", get(handlers::task::index))
        .route("/task/{id}", get(handlers::task::show))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
