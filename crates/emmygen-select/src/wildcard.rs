/// Glob match where `*` is the only wildcard.
///
/// Literal tokens between stars must occur left to right as non-overlapping
/// substrings; an edge token anchors to the start or end of the name unless
/// a star frees it.
#[must_use]
pub fn wildcard_matches(name: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return name == pattern;
    }
    let tokens: Vec<&str> = pattern.split('*').filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        return true;
    }

    let mut cursor = 0;
    let mut remaining = tokens.as_slice();

    if !pattern.starts_with('*') {
        let first = remaining[0];
        if !name.starts_with(first) {
            return false;
        }
        cursor = first.len();
        remaining = &remaining[1..];
    }

    let mut tail = None;
    if !pattern.ends_with('*') {
        if let Some((last, rest)) = remaining.split_last() {
            tail = Some(*last);
            remaining = rest;
        }
    }

    for token in remaining {
        match name[cursor..].find(token) {
            Some(at) => cursor += at + token.len(),
            None => return false,
        }
    }

    match tail {
        // The tail must fit after everything already consumed.
        Some(last) => name.len() >= cursor + last.len() && name.ends_with(last),
        None => true,
    }
}
