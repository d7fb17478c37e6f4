/// One rendered parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaParameter {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub variadic: bool,
}

/// One rendered generic parameter with an optional constraint expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaGenericParam {
    pub name: String,
    pub constraint: Option<String>,
}

/// Comma-joined parameter list.
///
/// The annotated form (`name: T`) goes inside `fun(...)` expressions and
/// overload lines; the bare form goes into the `function ... end` stub where
/// only names are legal.
#[must_use]
pub fn parameter_list(params: &[LuaParameter], annotated: bool) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|p| {
            if annotated {
                if p.variadic {
                    format!("...: {}", p.ty)
                } else if p.optional {
                    format!("{}?: {}", p.name, p.ty)
                } else {
                    format!("{}: {}", p.name, p.ty)
                }
            } else if p.variadic {
                "...".to_string()
            } else {
                p.name.clone()
            }
        })
        .collect();
    rendered.join(", ")
}

/// One `---@param` line per parameter.
pub fn param_annotations(params: &[LuaParameter], out: &mut String) {
    for p in params {
        if p.optional {
            out.push_str(&format!("---@param {}? {}\n", p.name, p.ty));
        } else if p.variadic {
            out.push_str(&format!("---@param ... {}\n", p.ty));
        } else {
            out.push_str(&format!("---@param {} {}\n", p.name, p.ty));
        }
    }
}

/// One `---@generic` line per generic parameter.
pub fn generic_annotations(generics: &[LuaGenericParam], out: &mut String) {
    for g in generics {
        match &g.constraint {
            Some(constraint) => {
                out.push_str(&format!("---@generic {} : {}\n", g.name, constraint));
            }
            None => out.push_str(&format!("---@generic {}\n", g.name)),
        }
    }
}
