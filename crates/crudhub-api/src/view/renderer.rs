//! minijinja-backed [`Renderer`].

use minijinja::Environment;

use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;
use crudhub_core::traits::Renderer;

use super::messages;

/// Templates compiled into the binary, keyed by the name views refer to.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (
        "security/_form.html",
        include_str!("../../templates/security/_form.html"),
    ),
    (
        "security/index.html",
        include_str!("../../templates/security/index.html"),
    ),
    (
        "security/view.html",
        include_str!("../../templates/security/view.html"),
    ),
    (
        "security/new.html",
        include_str!("../../templates/security/new.html"),
    ),
    (
        "security/edit.html",
        include_str!("../../templates/security/edit.html"),
    ),
    (
        "security/delete.html",
        include_str!("../../templates/security/delete.html"),
    ),
    ("task/index.html", include_str!("../../templates/task/index.html")),
    ("task/view.html", include_str!("../../templates/task/view.html")),
];

/// Renders the embedded templates. HTML auto-escaping is on for every
/// template since all names end in `.html`.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Compile every embedded template.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Template,
                    format!("Failed to compile template '{name}'"),
                    e,
                )
            })?;
        }
        env.add_filter("trans", messages::translate);
        Ok(Self { env })
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, view: &str, context: serde_json::Value) -> AppResult<String> {
        let name = format!("{view}.html");
        let template = self.env.get_template(&name).map_err(|e| {
            AppError::with_source(ErrorKind::Template, format!("Unknown view '{view}'"), e)
        })?;

        template.render(context).map_err(|e| {
            AppError::with_source(
                ErrorKind::Template,
                format!("Failed to render view '{view}'"),
                e,
            )
        })
    }
}
