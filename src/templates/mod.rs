//! Template-based file assembly
//!
//! Uses a MiniJinja template for the layout of a Cest file. The template is
//! embedded by default and can be overridden with `--template-dir`.

pub mod context;
pub mod filters;

use minijinja::Environment;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Template name of a Cest file
pub const CEST_TEMPLATE: &str = "cest.php.jinja";

// Embedded templates (compiled into binary)
mod embedded {
    pub const CEST: &str = include_str!("../../templates/cest.php.jinja");
}

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn base_engine() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    filters::register_filters(&mut env);
    env
}

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = base_engine();
    env.add_template(CEST_TEMPLATE, embedded::CEST)
        .expect("embedded cest template is valid");
    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Engine whose templates in `custom_dir` override the embedded ones
pub fn engine_with_override(custom_dir: &Path) -> Result<Environment<'static>> {
    let mut env = init_engine();
    let path = custom_dir.join(CEST_TEMPLATE);
    if path.exists() {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Other(format!("Failed to read {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "using custom template");
        env.add_template_owned(CEST_TEMPLATE, content)?;
    }
    Ok(env)
}

/// Render a Cest file
pub fn render_cest(env: &Environment<'_>, ctx: &context::CestContext) -> Result<String> {
    let template = env.get_template(CEST_TEMPLATE)?;
    Ok(template.render(ctx)?)
}
