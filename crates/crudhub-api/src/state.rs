//! Application state shared across all handlers.

use std::sync::Arc;

use axum::response::Html;

use crudhub_core::config::AppConfig;
use crudhub_core::result::AppResult;
use crudhub_core::traits::{Renderer, Repository};
use crudhub_database::Repositories;
use crudhub_entity::{Security, Task};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Backend wiring, kept for health checks
    pub repositories: Repositories,
    /// Security repository
    pub securities: Arc<dyn Repository<Security>>,
    /// Task repository
    pub tasks: Arc<dyn Repository<Task>>,
    /// HTML renderer
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Assemble state from already-built collaborators.
    pub fn new(config: AppConfig, repositories: Repositories, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            config: Arc::new(config),
            securities: Arc::clone(&repositories.securities),
            tasks: Arc::clone(&repositories.tasks),
            repositories,
            renderer,
        }
    }

    /// Render a view to an HTML body.
    pub fn render(&self, view: &str, context: serde_json::Value) -> AppResult<Html<String>> {
        self.renderer.render(view, context).map(Html)
    }
}
