//! Custom MiniJinja filters for file assembly

use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("indent", indent);
}

/// Prefix each non-empty line with `unit`
fn indent(value: &str, unit: &str) -> String {
    value
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", unit, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
