use emmygen_lua::{escape_name, LuaParameter};
use emmygen_model::ParamDef;

use crate::error::Result;
use crate::mapper::TypeMapper;

/// Turns reflected parameters into renderable ones.
///
/// `precedence` wraps flagged type expressions in parens; delegate signatures
/// need it because their parameters embed directly in a `fun(...)` text.
pub fn synthesize_params(
    mapper: &TypeMapper<'_>,
    params: &[ParamDef],
    precedence: bool,
) -> Result<Vec<LuaParameter>> {
    params
        .iter()
        .map(|param| {
            let mapped = if param.variadic {
                mapper.map_variadic(param.ty)?
            } else {
                mapper.map_type(param.ty)?
            };
            let ty = if precedence {
                mapped.parenthesized()
            } else {
                mapped.text
            };
            Ok(LuaParameter {
                name: escape_name(param.name.as_deref().unwrap_or("arg")),
                ty,
                optional: param.optional,
                variadic: param.variadic,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use emmygen_model::{ScalarKind, TypeDef, TypeKind, TypeStore};

    use crate::caches::MapCaches;

    use super::*;

    #[test]
    fn names_escape_keywords_and_default_to_arg() {
        let mut store = TypeStore::new();
        let int = store.add_type(TypeDef::new(
            "Int32",
            TypeKind::Scalar {
                scalar: ScalarKind::Integer,
            },
        ));
        let caches = MapCaches::new();
        let mapper = TypeMapper::new(&store, &caches);
        let params = vec![
            ParamDef {
                name: Some("end".into()),
                ty: int,
                optional: false,
                variadic: false,
            },
            ParamDef {
                name: None,
                ty: int,
                optional: true,
                variadic: false,
            },
        ];
        let synthesized = synthesize_params(&mapper, &params, false).unwrap();
        assert_eq!(synthesized[0].name, "__end__");
        assert_eq!(synthesized[1].name, "arg");
        assert!(synthesized[1].optional);
    }

    #[test]
    fn variadic_params_use_the_array_element() {
        let mut store = TypeStore::new();
        let int = store.add_type(TypeDef::new(
            "Int32",
            TypeKind::Scalar {
                scalar: ScalarKind::Integer,
            },
        ));
        let array = store.add_type(TypeDef::new("Int32[]", TypeKind::Array { element: int }));
        let caches = MapCaches::new();
        let mapper = TypeMapper::new(&store, &caches);
        let params = vec![ParamDef {
            name: Some("rest".into()),
            ty: array,
            optional: false,
            variadic: true,
        }];
        let synthesized = synthesize_params(&mapper, &params, false).unwrap();
        assert_eq!(synthesized[0].ty, "integer");
        assert!(synthesized[0].variadic);
    }
}
