use std::collections::HashSet;

use emmygen_lua::{
    field_key, LuaAccess, LuaClass, LuaConstructor, LuaEnum, LuaEnumMember, LuaField, LuaFunction,
    LuaGenericMethod, LuaGenericParam, LuaMethod, LuaOperator, LuaOverload, OperatorKind,
};
use emmygen_map::{synthesize_params, Result, TypeMapper};
use emmygen_model::{
    Access, EnumMemberDef, GenericParamOwner, MethodDef, TypeId, TypeKind,
};

fn lua_access(access: Access) -> LuaAccess {
    match access {
        Access::Public | Access::Unknown => LuaAccess::Public,
        Access::Private => LuaAccess::Private,
        Access::Protected => LuaAccess::Protected,
        Access::Package => LuaAccess::Package,
    }
}

/// Member name with any explicit-interface prefix stripped.
fn simple_member_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[dot + 1..],
        _ => name,
    }
}

pub(crate) fn collect_enum(
    mapper: &TypeMapper<'_>,
    id: TypeId,
    members: &[EnumMemberDef],
) -> Result<LuaEnum> {
    Ok(LuaEnum {
        name: mapper.qualified_name(id)?,
        members: members
            .iter()
            .map(|m| LuaEnumMember {
                name: m.name.clone(),
                value: m.value,
            })
            .collect(),
    })
}

pub(crate) fn collect_class(mapper: &TypeMapper<'_>, id: TypeId) -> Result<LuaClass> {
    let class_name = mapper.qualified_name(id)?;
    let (bases, primary_base_opaque) = collect_base_types(mapper, id)?;

    // An opaque primary base hides the whole ancestry from the annotation
    // graph, so members are flattened from every ancestor instead.
    let candidates = if primary_base_opaque {
        mapper.inheritance_chain(id)?
    } else {
        vec![id]
    };

    let mut functions = collect_methods(mapper, &class_name, &candidates)?;
    functions.extend(collect_generic_methods(mapper, &class_name, &candidates)?);

    Ok(LuaClass {
        bases: if bases.is_empty() {
            None
        } else {
            Some(bases.join(", "))
        },
        fields: collect_fields(mapper, &candidates)?,
        operators: collect_operators(mapper, id)?,
        functions,
        constructor: collect_constructor(mapper, &class_name, id)?,
        name: class_name,
    })
}

fn collect_base_types(mapper: &TypeMapper<'_>, id: TypeId) -> Result<(Vec<String>, bool)> {
    let def = mapper.lookup(id)?;
    let object = mapper.store().object();
    let mut bases = Vec::new();
    let mut primary_base_opaque = false;

    match def.base {
        Some(base) if Some(base) != object => {
            let name = mapper.qualified_name(base)?;
            primary_base_opaque = name == emmygen_map::OPAQUE;
            bases.push(name);
        }
        _ => {
            if !def.is_interface && Some(id) != object {
                if let Some(object) = object {
                    bases.push(mapper.qualified_name(object)?);
                }
            }
        }
    }

    for &iface in &def.interfaces {
        if mapper.lookup(iface)?.is_generic_type() {
            continue;
        }
        bases.push(mapper.qualified_name(iface)?);
    }

    if let TypeKind::Scalar { scalar } = def.kind {
        bases.push(emmygen_map::scalar_token(scalar).to_string());
    }

    for prop in &def.properties {
        if prop.access == Access::Public && prop.index_params.len() == 1 {
            let key = mapper.qualified_name(prop.index_params[0].ty)?;
            let value = mapper.qualified_name(prop.ty)?;
            bases.push(format!("{{ [{key}]: {value} }}"));
        }
    }

    Ok((bases, primary_base_opaque))
}

fn collect_fields(mapper: &TypeMapper<'_>, candidates: &[TypeId]) -> Result<Vec<LuaField>> {
    let mut fields = Vec::new();
    let mut hidden: HashSet<String> = HashSet::new();

    for &candidate in candidates {
        let def = mapper.lookup(candidate)?;
        for prop in &def.properties {
            if !prop.index_params.is_empty() {
                continue;
            }
            if prop.is_compiler_generated || hidden.contains(&prop.name) {
                continue;
            }
            fields.push(LuaField {
                name: field_key(&prop.name),
                ty: mapper.map_type(prop.ty)?.text,
                access: lua_access(prop.access),
            });
            // An overriding accessor hides the base declarations of the
            // same property further down the chain.
            if prop.overrides_base {
                hidden.insert(prop.name.clone());
            }
        }
    }

    for &candidate in candidates {
        let def = mapper.lookup(candidate)?;
        for field in &def.fields {
            if field.is_compiler_generated || field.is_special_name {
                continue;
            }
            fields.push(LuaField {
                name: field_key(&field.name),
                ty: mapper.map_type(field.ty)?.text,
                access: lua_access(field.access),
            });
        }
    }

    Ok(fields)
}

fn collect_operators(mapper: &TypeMapper<'_>, id: TypeId) -> Result<Vec<LuaOperator>> {
    let def = mapper.lookup(id)?;
    let mut operators = Vec::new();

    for method in &def.methods {
        if !method.is_special_name || method.is_generic() || method.is_compiler_generated {
            continue;
        }
        // The annotation's implicit left operand is the class itself.
        if method.params.first().map(|p| p.ty) != Some(id) {
            continue;
        }
        let kind = match method.name.as_str() {
            "op_Addition" => OperatorKind::Add,
            "op_Subtraction" => OperatorKind::Sub,
            "op_Multiply" => OperatorKind::Mul,
            "op_Division" => OperatorKind::Div,
            "op_UnaryNegation" => OperatorKind::Unm,
            _ => continue,
        };
        let operand = if kind.is_binary() {
            match method.params.get(1) {
                Some(param) => Some(mapper.map_return_type(param.ty)?.text),
                None => continue,
            }
        } else {
            None
        };
        operators.push(LuaOperator {
            kind,
            operand,
            result: mapper.map_return_type(method.return_type)?.text,
        });
    }

    Ok(operators)
}

#[derive(PartialEq, Eq)]
struct MethodGroupKey {
    name: String,
    access: Access,
    implicit_self: bool,
    is_async: bool,
}

fn collect_methods(
    mapper: &TypeMapper<'_>,
    class_name: &str,
    candidates: &[TypeId],
) -> Result<Vec<LuaFunction>> {
    // Same-signature-group methods collapse into one stub plus overload
    // lines; groups keep first-occurrence order.
    let mut groups: Vec<(MethodGroupKey, Vec<&MethodDef>)> = Vec::new();

    for &candidate in candidates {
        let def = mapper.lookup(candidate)?;
        for method in &def.methods {
            if method.is_generic() || method.is_compiler_generated || method.is_special_name {
                continue;
            }
            let key = MethodGroupKey {
                name: simple_member_name(&method.name).to_string(),
                access: method.access,
                implicit_self: !method.is_static,
                is_async: is_async_method(mapper, method)?,
            };
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(method),
                None => groups.push((key, vec![method])),
            }
        }
    }

    let mut functions = Vec::new();
    for (key, members) in groups {
        let primary = members[0];
        let mut overloads = Vec::new();
        for overload in &members[1..] {
            overloads.push(LuaOverload {
                implicit_self: !overload.is_static,
                params: synthesize_params(mapper, &overload.params, false)?,
                ret: mapper.map_return_type(overload.return_type)?.text,
            });
        }
        functions.push(LuaFunction::Method(LuaMethod {
            class_name: class_name.to_string(),
            name: key.name,
            implicit_self: key.implicit_self,
            is_async: key.is_async,
            access: lua_access(key.access),
            params: synthesize_params(mapper, &primary.params, false)?,
            overloads,
            ret: mapper.map_return_type(primary.return_type)?.text,
        }));
    }

    Ok(functions)
}

fn is_async_method(mapper: &TypeMapper<'_>, method: &MethodDef) -> Result<bool> {
    Ok(method.has_async_marker || mapper.is_awaitable(method.return_type)?)
}

fn collect_generic_methods(
    mapper: &TypeMapper<'_>,
    class_name: &str,
    candidates: &[TypeId],
) -> Result<Vec<LuaFunction>> {
    let mut functions = Vec::new();

    for &candidate in candidates {
        let def = mapper.lookup(candidate)?;
        for method in &def.methods {
            if !method.is_generic() || method.is_compiler_generated {
                continue;
            }
            if !is_supported_generic_method(mapper, method)? {
                tracing::debug!(method = %method.name, "skipping unsupported generic method");
                continue;
            }
            functions.push(LuaFunction::Generic(LuaGenericMethod {
                method: LuaMethod {
                    class_name: class_name.to_string(),
                    name: simple_member_name(&method.name).to_string(),
                    implicit_self: !method.is_static,
                    is_async: is_async_method(mapper, method)?,
                    access: lua_access(method.access),
                    params: synthesize_params(mapper, &method.params, false)?,
                    overloads: Vec::new(),
                    ret: mapper.map_return_type(method.return_type)?.text,
                },
                generics: collect_generic_params(mapper, method)?,
            }));
        }
    }

    Ok(functions)
}

/// A generic method can only be annotated when every generic argument is
/// reference constrained and named by some parameter, and no parameter is a
/// type-scoped generic parameter.
fn is_supported_generic_method(mapper: &TypeMapper<'_>, method: &MethodDef) -> Result<bool> {
    if !method.is_generic() {
        return Ok(false);
    }
    for param in &method.params {
        if matches!(
            mapper.lookup(param.ty)?.kind,
            TypeKind::GenericParam {
                owner: GenericParamOwner::Type
            }
        ) {
            return Ok(false);
        }
    }
    for generic in &method.generic_params {
        let mut constrained = generic.has_reference_constraint;
        if !constrained && !generic.constraints.is_empty() {
            constrained = true;
            for &constraint in &generic.constraints {
                if !mapper.lookup(constraint)?.is_class {
                    constrained = false;
                    break;
                }
            }
        }
        if !constrained {
            return Ok(false);
        }
        let mut appears = false;
        for param in &method.params {
            let param_def = mapper.lookup(param.ty)?;
            if matches!(
                param_def.kind,
                TypeKind::GenericParam {
                    owner: GenericParamOwner::Method
                }
            ) && param_def.name == generic.name
            {
                appears = true;
                break;
            }
        }
        if !appears {
            return Ok(false);
        }
    }
    Ok(true)
}

fn collect_generic_params(
    mapper: &TypeMapper<'_>,
    method: &MethodDef,
) -> Result<Vec<LuaGenericParam>> {
    let mut generics = Vec::new();
    for generic in &method.generic_params {
        let constraint = if !generic.constraints.is_empty() {
            let mut names = Vec::with_capacity(generic.constraints.len());
            for &constraint in &generic.constraints {
                names.push(mapper.qualified_name(constraint)?);
            }
            Some(names.join(", "))
        } else if generic.has_reference_constraint {
            match mapper.store().object() {
                Some(object) => Some(mapper.qualified_name(object)?),
                None => None,
            }
        } else {
            None
        };
        generics.push(LuaGenericParam {
            name: generic.name.clone(),
            constraint,
        });
    }
    Ok(generics)
}

fn collect_constructor(
    mapper: &TypeMapper<'_>,
    class_name: &str,
    id: TypeId,
) -> Result<Option<LuaConstructor>> {
    let def = mapper.lookup(id)?;
    let Some(primary) = def.constructors.first() else {
        return Ok(None);
    };
    let mut overloads = Vec::new();
    for ctor in &def.constructors[1..] {
        overloads.push(LuaOverload {
            implicit_self: false,
            params: synthesize_params(mapper, &ctor.params, false)?,
            ret: class_name.to_string(),
        });
    }
    Ok(Some(LuaConstructor {
        class_name: class_name.to_string(),
        access: lua_access(primary.access),
        params: synthesize_params(mapper, &primary.params, false)?,
        overloads,
    }))
}
