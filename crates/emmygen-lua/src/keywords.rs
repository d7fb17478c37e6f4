/// Lua reserved words, matched case-insensitively.
const RESERVED: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}

/// Rewrites names that collide with a Lua keyword so they stay valid
/// identifiers in parameter lists.
#[must_use]
pub fn escape_name(name: &str) -> String {
    if is_reserved(name) {
        format!("__{name}__")
    } else {
        name.to_string()
    }
}

/// Field names containing metadata punctuation cannot appear after a dot;
/// they are spelled as string keys instead.
#[must_use]
pub fn field_key(name: &str) -> String {
    if name.contains(['<', '.', '>']) {
        format!("[\"{name}\"]")
    } else {
        name.to_string()
    }
}
