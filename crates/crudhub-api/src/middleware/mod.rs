//! Axum middleware stack.

pub mod logging;
pub mod method_override;

pub use logging::request_logging;
pub use method_override::method_override;
