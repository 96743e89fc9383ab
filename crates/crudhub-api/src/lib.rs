//! # crudhub-api
//!
//! HTTP layer for CrudHub built on Axum.
//!
//! Provides the server-rendered CRUD pages, the identifier extractor,
//! form DTOs with validation, flash messages, the template renderer,
//! and request middleware.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod view;

pub use app::{build_app, build_state};
pub use state::AppState;
