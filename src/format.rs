//! Statement formatting - PHP literal and expression snippets
//!
//! Small pure helpers shared by every emitter:
//! - string quoting and escaping
//! - variable reference (`$name`) and assignment syntax
//! - `${name}` interpolation of recorded parameters
//! - script argument lists appended to `executeJS` calls

use regex::Regex;
use std::sync::OnceLock;

/// Matches `${name}` references inside recorded parameters
pub(crate) fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("variable pattern is valid"))
}

/// Escape text for a double-quoted PHP string
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Wrap text in a double-quoted PHP string
///
/// `$name` references are left as-is so PHP interpolates them.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

/// Wrap text in a single-quoted PHP string (no interpolation)
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Escape a recorded script for embedding in a double-quoted string.
/// Backticks are escaped as well.
pub fn escape_script(script: &str) -> String {
    escape(script).replace('`', "\\`")
}

/// Variable reference syntax
pub fn variable(name: &str) -> String {
    format!("${}", name)
}

/// Assignment statement, or the bare statement when no variable is named
pub fn assign(var_name: &str, expr: &str) -> String {
    if var_name.is_empty() {
        format!("{};", expr)
    } else {
        format!("{} = {};", variable(var_name), expr)
    }
}

/// Replace `${name}` with `$name`
pub fn interpolate(text: &str) -> String {
    variable_pattern().replace_all(text, "$$$1").into_owned()
}

/// Arguments appended to a script call: `""` or `, $a,$b`
pub fn script_arguments(argv: &[String]) -> String {
    if argv.is_empty() {
        return String::new();
    }
    let vars: Vec<String> = argv.iter().map(|v| variable(v)).collect();
    format!(", {}", vars.join(","))
}

/// Render a value as a PHP literal.
///
/// Anything starting with `$` is taken to be a variable reference already,
/// numbers and keywords pass through, everything else is quoted.
pub fn literal(value: &str) -> String {
    let value = interpolate(value);
    let is_keyword = matches!(value.as_str(), "true" | "false" | "null");
    let is_number = value.parse::<f64>().is_ok()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
    if value.starts_with('$') || is_keyword || is_number {
        value
    } else {
        quote(&value)
    }
}

/// Floor a recorded numeric parameter to an integer.
///
/// Text that does not parse as a number is passed through trimmed.
pub fn floor_number(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => format!("{}", n.floor() as i64),
        _ => trimmed.to_string(),
    }
}

/// Join call arguments
pub fn arguments(args: &[String]) -> String {
    args.join(", ")
}
