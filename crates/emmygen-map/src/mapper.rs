use emmygen_lua::parameter_list;
use emmygen_model::{
    Access, GenericParamOwner, MappedType, SpecialShape, TypeDef, TypeId, TypeKind, TypeStore,
};

use crate::caches::MapCaches;
use crate::error::{MapError, Result};
use crate::params::synthesize_params;
use crate::scalars::{scalar_token, OPAQUE};

/// Maps type references from one dump to Lua type expressions.
///
/// Cheap to copy; all state lives in the store and the shared caches.
#[derive(Clone, Copy)]
pub struct TypeMapper<'a> {
    store: &'a TypeStore,
    caches: &'a MapCaches,
}

impl<'a> TypeMapper<'a> {
    #[must_use]
    pub fn new(store: &'a TypeStore, caches: &'a MapCaches) -> Self {
        TypeMapper { store, caches }
    }

    #[must_use]
    pub fn store(&self) -> &'a TypeStore {
        self.store
    }

    pub fn lookup(&self, id: TypeId) -> Result<&'a TypeDef> {
        self.store.get(id).ok_or(MapError::UnknownType(id))
    }

    /// Dotted name of a type: namespace segments, then the declaring chain
    /// from outermost to innermost, then the type's own name. Generic types
    /// collapse to the opaque token.
    pub fn qualified_name(&self, id: TypeId) -> Result<String> {
        if let Some(cached) = self.caches.qualified.get(&id) {
            return Ok(cached.clone());
        }
        let name = self.qualified_name_uncached(id)?;
        Ok(self.caches.qualified.entry(id).or_insert(name).clone())
    }

    fn qualified_name_uncached(&self, id: TypeId) -> Result<String> {
        let def = self.lookup(id)?;
        if def.is_generic_type() {
            return Ok(OPAQUE.to_string());
        }
        let mut segments: Vec<&str> = Vec::new();
        if let Some(namespace) = def.namespace.as_deref() {
            if !namespace.is_empty() {
                segments.extend(namespace.split('.'));
            }
        }
        let mut chain: Vec<&str> = Vec::new();
        let mut seen = vec![id];
        let mut current = def.declaring;
        while let Some(declaring) = current {
            if seen.contains(&declaring) {
                return Err(MapError::CyclicType(id));
            }
            seen.push(declaring);
            let outer = self.lookup(declaring)?;
            chain.push(&outer.name);
            current = outer.declaring;
        }
        segments.extend(chain.iter().rev());
        segments.push(&def.name);
        Ok(segments.join("."))
    }

    /// Maps a type reference to its Lua expression.
    pub fn map_type(&self, id: TypeId) -> Result<MappedType> {
        if let Some(cached) = self.caches.mapped.get(&id) {
            return Ok(cached.clone());
        }
        let mapped = self.map_uncached(id)?;
        Ok(self.caches.mapped.entry(id).or_insert(mapped).clone())
    }

    /// Maps a type reference, wrapped in parens when embedding requires it.
    pub fn map_precedence(&self, id: TypeId) -> Result<String> {
        Ok(self.map_type(id)?.parenthesized())
    }

    fn map_uncached(&self, id: TypeId) -> Result<MappedType> {
        let def = self.lookup(id)?;
        match &def.kind {
            TypeKind::Void => Ok(MappedType::plain("")),
            TypeKind::GenericParam {
                owner: GenericParamOwner::Method,
            } => Ok(MappedType::plain(def.name.clone())),
            TypeKind::Scalar { scalar } => Ok(MappedType::plain(scalar_token(*scalar))),
            TypeKind::Enum { .. } => Ok(MappedType::plain(self.qualified_name(id)?)),
            TypeKind::Array { element } => Ok(MappedType::plain(format!(
                "{}[]",
                self.map_precedence(*element)?
            ))),
            // Reference passing is invisible to Lua callers.
            TypeKind::ByRef { referent } => {
                Ok(MappedType::plain(self.map_type(*referent)?.text))
            }
            TypeKind::Delegate => self.map_delegate(def),
            TypeKind::GenericInstance { definition, args } => {
                match (self.lookup(*definition)?.shape, args.as_slice()) {
                    (Some(SpecialShape::Nullable), [inner]) => Ok(MappedType::flagged(format!(
                        "{}|nil",
                        self.map_precedence(*inner)?
                    ))),
                    (Some(SpecialShape::ListLike), [element]) => Ok(MappedType::plain(format!(
                        "{}[]",
                        self.map_precedence(*element)?
                    ))),
                    (Some(SpecialShape::DictLike), [key, value]) => {
                        Ok(MappedType::plain(format!(
                            "{{ [{}]: {} }}",
                            self.map_type(*key)?.text,
                            self.map_type(*value)?.text,
                        )))
                    }
                    _ => self.map_named(id),
                }
            }
            TypeKind::Ordinary
            | TypeKind::GenericParam {
                owner: GenericParamOwner::Type,
            } => self.map_named(id),
        }
    }

    fn map_named(&self, id: TypeId) -> Result<MappedType> {
        let qualified = self.qualified_name(id)?;
        if qualified != OPAQUE {
            return Ok(MappedType::plain(qualified));
        }
        self.map_composite(id)
    }

    /// Opaque types are described structurally: the opaque token unioned
    /// with every indexer and element shape reachable through the type.
    fn map_composite(&self, id: TypeId) -> Result<MappedType> {
        let mut parts = vec![MappedType::plain(OPAQUE)];
        for ancestor in self.inheritance_chain(id)? {
            let def = self.lookup(ancestor)?;
            for prop in &def.properties {
                if prop.access == Access::Public && prop.index_params.len() == 1 {
                    let key = self.map_type(prop.index_params[0].ty)?.text;
                    let value = self.map_type(prop.ty)?.text;
                    parts.push(MappedType::plain(format!("{{ [{key}]: {value} }}")));
                }
            }
        }
        for shape in [SpecialShape::Enumerable, SpecialShape::Enumerator] {
            if let Some(element) = self.shape_element(id, shape)? {
                let element = self.map_type(element)?.text;
                parts.push(MappedType::plain(format!("{{ [nil]: {element} }}")));
            }
        }
        let needs_parens = parts.len() > 1 || parts.iter().any(|p| p.needs_parens);
        let text = if parts.len() > 1 {
            parts
                .iter()
                .map(MappedType::parenthesized)
                .collect::<Vec<_>>()
                .join(" | ")
        } else {
            parts.remove(0).text
        };
        Ok(MappedType { text, needs_parens })
    }

    /// The type and its base classes, most derived first.
    pub fn inheritance_chain(&self, id: TypeId) -> Result<Vec<TypeId>> {
        let mut chain = vec![id];
        let mut current = self.lookup(id)?.base;
        while let Some(base) = current {
            if chain.contains(&base) {
                return Err(MapError::CyclicType(id));
            }
            chain.push(base);
            current = self.lookup(base)?.base;
        }
        Ok(chain)
    }

    fn map_delegate(&self, def: &TypeDef) -> Result<MappedType> {
        let Some(invoke) = def.methods.iter().find(|m| m.name == "Invoke") else {
            return Ok(MappedType::flagged("fun()"));
        };
        let params = synthesize_params(self, &invoke.params, true)?;
        let list = parameter_list(&params, true);
        let ret = self.map_type(invoke.return_type)?;
        let text = if ret.is_void() {
            format!("fun({list})")
        } else {
            format!("fun({list}): {}", ret.text)
        };
        Ok(MappedType::flagged(text))
    }

    /// Maps a method return type; awaitable returns collapse to the awaited
    /// result so `---@async` stubs annotate what a caller actually gets.
    pub fn map_return_type(&self, id: TypeId) -> Result<MappedType> {
        match self.awaitable_element(id)? {
            Some(Some(element)) => self.map_type(element),
            Some(None) => Ok(MappedType::plain("")),
            None => self.map_type(id),
        }
    }

    pub fn is_awaitable(&self, id: TypeId) -> Result<bool> {
        Ok(self.awaitable_element(id)?.is_some())
    }

    /// `Some(Some(t))` for an awaitable producing `t`, `Some(None)` for a
    /// bare awaitable, `None` when the type is not awaitable at all.
    fn awaitable_element(&self, id: TypeId) -> Result<Option<Option<TypeId>>> {
        for ancestor in self.inheritance_chain(id)? {
            let def = self.lookup(ancestor)?;
            if let TypeKind::GenericInstance { definition, args } = &def.kind {
                if self.lookup(*definition)?.shape == Some(SpecialShape::Awaitable) {
                    return Ok(Some(args.first().copied()));
                }
            }
            if def.shape == Some(SpecialShape::Awaitable) {
                return Ok(Some(None));
            }
        }
        Ok(None)
    }

    /// Element type announced for a variadic parameter: arrays contribute
    /// their element, anything else maps as itself.
    pub fn map_variadic(&self, id: TypeId) -> Result<MappedType> {
        match self.lookup(id)?.kind {
            TypeKind::Array { element } => self.map_type(element),
            _ => self.map_type(id),
        }
    }

    fn shape_element(&self, id: TypeId, shape: SpecialShape) -> Result<Option<TypeId>> {
        for ancestor in self.inheritance_chain(id)? {
            if let Some(element) = self.instance_shape_element(ancestor, shape)? {
                return Ok(Some(element));
            }
            let def = self.lookup(ancestor)?;
            for &iface in &def.interfaces {
                if let Some(element) = self.instance_shape_element(iface, shape)? {
                    return Ok(Some(element));
                }
            }
        }
        Ok(None)
    }

    fn instance_shape_element(&self, id: TypeId, shape: SpecialShape) -> Result<Option<TypeId>> {
        if let TypeKind::GenericInstance { definition, args } = &self.lookup(id)?.kind {
            if self.lookup(*definition)?.shape == Some(shape) {
                return Ok(args.first().copied());
            }
        }
        Ok(None)
    }
}
