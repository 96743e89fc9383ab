//! Application builder: wires state, router, and middleware into an Axum
//! app.

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use tower_http::trace::TraceLayer;

use crudhub_core::config::AppConfig;
use crudhub_core::result::AppResult;
use crudhub_database::Repositories;
use crudhub_database::seed::seed_tasks;

use crate::middleware::{method_override, request_logging};
use crate::router::build_router;
use crate::state::AppState;
use crate::view::TemplateRenderer;

/// Builds the complete Axum application with all routes and middleware.
///
/// Method override has to see the request before routing, so it wraps the
/// page router as an outer service instead of being a route layer.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .fallback_service(build_router(state))
        .layer(from_fn(method_override))
        .layer(from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}

/// Construct repositories for the configured backend, seed fixtures, and
/// compile templates.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let repositories = Repositories::from_config(&config.database).await?;

    if config.database.seed_fixtures {
        seed_tasks(repositories.tasks.as_ref()).await?;
    }

    let renderer = Arc::new(TemplateRenderer::new()?);
    Ok(AppState::new(config, repositories, renderer))
}
