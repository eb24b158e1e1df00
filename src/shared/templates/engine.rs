//! Template engine for server-rendered pages using Jinja2 syntax.
//!
//! Templates are compiled into the binary so the service does not depend on
//! its working directory. Names ending in `.html.jinja` get HTML auto-escaping.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Templates bundled with the binary, keyed by their lookup name
const TEMPLATES: &[(&str, &str)] = &[
    (
        "dashboard/layout.html.jinja",
        include_str!("../../../templates/dashboard/layout.html.jinja"),
    ),
    (
        "dashboard/page.html.jinja",
        include_str!("../../../templates/dashboard/page.html.jinja"),
    ),
    (
        "dashboard/sections.html.jinja",
        include_str!("../../../templates/dashboard/sections.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a bundled template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let html = render_template("dashboard/page.html.jinja", context! { page => page })?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
