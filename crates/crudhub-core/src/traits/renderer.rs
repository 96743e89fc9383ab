//! Rendering collaborator seam.

use crate::result::AppResult;

/// Turns a named view and a data structure into an HTML document.
///
/// Handlers only build the context; they never depend on markup.
pub trait Renderer: Send + Sync {
    /// Render `view` (e.g. `"security/index"`) with `context`.
    fn render(&self, view: &str, context: serde_json::Value) -> AppResult<String>;
}
