//! Elm identifier casing rules.
//!
//! All generated artifact names pass through here before collision
//! resolution: type, constructor and module names are upper-first,
//! field and variable names lower-first. Characters Elm identifiers
//! cannot contain are dropped.

/// Elm keywords that cannot be used as a field or variable name.
const ELM_KEYWORDS: [&str; 14] = [
    "if", "then", "else", "case", "of", "let", "in", "type", "module", "where", "import",
    "exposing", "as", "port",
];

/// Raise the first ASCII letter of `s`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower the first ASCII letter of `s`.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Keep only characters valid inside an Elm identifier, dropping
/// anything in leading position that cannot start one.
fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if out.is_empty() && !c.is_ascii_alphabetic() {
                continue;
            }
            out.push(c);
        }
    }
    out
}

/// Normalize a candidate into a valid Elm type name (upper-first).
///
/// # Examples
/// ```
/// use elmgraph_core::utils::valid_type_name;
/// assert_eq!(valid_type_name("hero"), "Hero");
/// assert_eq!(valid_type_name("3D-Point"), "DPoint");
/// ```
pub fn valid_type_name(s: &str) -> String {
    let name = upper_first(&sanitize(s));
    if name.is_empty() { "T".to_string() } else { name }
}

/// Normalize a candidate into a valid Elm data-constructor name.
pub fn valid_constructor_name(s: &str) -> String {
    valid_type_name(s)
}

/// Normalize a candidate into a valid Elm module name segment.
pub fn valid_module_name(s: &str) -> String {
    let name = upper_first(&sanitize(s));
    if name.is_empty() { "M".to_string() } else { name }
}

/// Normalize a candidate into a valid Elm record-field or variable name
/// (lower-first, keywords escaped with a trailing underscore).
///
/// # Examples
/// ```
/// use elmgraph_core::utils::valid_field_name;
/// assert_eq!(valid_field_name("Name"), "name");
/// assert_eq!(valid_field_name("type"), "type_");
/// ```
pub fn valid_field_name(s: &str) -> String {
    let name = lower_first(&sanitize(s));
    if name.is_empty() {
        return "field".to_string();
    }
    if ELM_KEYWORDS.contains(&name.as_str()) {
        return name + "_";
    }
    name
}

/// Normalize a candidate into a valid Elm variable name.
pub fn valid_variable_name(s: &str) -> String {
    valid_field_name(s)
}
