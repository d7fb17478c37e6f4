use emmygen_model::ScalarKind;

/// Lua token for values the annotation dialect cannot describe further.
pub const OPAQUE: &str = "userdata";

/// Annotation token for a scalar category.
#[must_use]
pub fn scalar_token(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Boolean => "boolean",
        ScalarKind::Integer => "integer",
        ScalarKind::Number => "number",
        ScalarKind::Str => "string",
        ScalarKind::Opaque => OPAQUE,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_match_the_annotation_dialect() {
        assert_eq!(scalar_token(ScalarKind::Integer), "integer");
        assert_eq!(scalar_token(ScalarKind::Str), "string");
        assert_eq!(scalar_token(ScalarKind::Opaque), "userdata");
    }
}
