//! Shared utility functions
//!
//! Name sanitizing used when recorded test and suite names become PHP
//! method and class identifiers.

/// Split a free-form name into its alphanumeric words
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a free-form name to PascalCase
///
/// # Examples
/// ```
/// use side_export::util::to_pascal_case;
/// assert_eq!(to_pascal_case("login flow"), "LoginFlow");
/// assert_eq!(to_pascal_case("check_out-page"), "CheckOutPage");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a free-form name to camelCase
///
/// # Examples
/// ```
/// use side_export::util::to_camel_case;
/// assert_eq!(to_camel_case("Login Flow"), "loginFlow");
/// assert_eq!(to_camel_case("foo"), "foo");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a recorded test name into a PHP method name.
///
/// PHP identifiers cannot start with a digit, so such names get a `test`
/// prefix; empty names become `test`.
pub fn sanitize_name(s: &str) -> String {
    let name = to_camel_case(s);
    match name.chars().next() {
        None => "test".to_string(),
        Some(c) if c.is_ascii_digit() => format!("test{}", name),
        Some(_) => name,
    }
}
