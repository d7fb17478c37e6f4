use thiserror::Error;

use crate::ty::{TypeDef, TypeId, TypeKind};

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("type {referrer} references unknown type {id}")]
    UnknownTypeId { referrer: TypeId, id: TypeId },
    #[error("dump names an object root that is not in the type table")]
    UnknownObjectRoot,
}

/// Arena of every type in one dump.
///
/// Ids are dense indices into `types`; `validate` checks that every
/// cross-reference stays inside the table before the pipeline dereferences
/// anything.
#[derive(Debug, Default)]
pub struct TypeStore {
    types: Vec<TypeDef>,
    object: Option<TypeId>,
}

impl TypeStore {
    #[must_use]
    pub fn new() -> Self {
        TypeStore::default()
    }

    pub fn add_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(def);
        id
    }

    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeId::new(i as u32), def))
    }

    /// The dump's root object type, when one was recorded.
    #[must_use]
    pub fn object(&self) -> Option<TypeId> {
        self.object
    }

    pub fn set_object(&mut self, id: TypeId) {
        self.object = Some(id);
    }

    /// Checks every id stored in the table against the table bounds.
    pub fn validate(&self) -> Result<()> {
        if let Some(object) = self.object {
            if self.get(object).is_none() {
                return Err(ModelError::UnknownObjectRoot);
            }
        }
        for (id, def) in self.iter() {
            self.check(id, def.declaring)?;
            self.check(id, def.base)?;
            for &iface in &def.interfaces {
                self.check(id, Some(iface))?;
            }
            match &def.kind {
                TypeKind::Array { element } => self.check(id, Some(*element))?,
                TypeKind::ByRef { referent } => self.check(id, Some(*referent))?,
                TypeKind::GenericInstance { definition, args } => {
                    self.check(id, Some(*definition))?;
                    for &arg in args {
                        self.check(id, Some(arg))?;
                    }
                }
                _ => {}
            }
            for field in &def.fields {
                self.check(id, Some(field.ty))?;
            }
            for prop in &def.properties {
                self.check(id, Some(prop.ty))?;
                for param in &prop.index_params {
                    self.check(id, Some(param.ty))?;
                }
            }
            for method in &def.methods {
                self.check(id, Some(method.return_type))?;
                for param in &method.params {
                    self.check(id, Some(param.ty))?;
                }
                for generic in &method.generic_params {
                    for &constraint in &generic.constraints {
                        self.check(id, Some(constraint))?;
                    }
                }
            }
            for ctor in &def.constructors {
                for param in &ctor.params {
                    self.check(id, Some(param.ty))?;
                }
            }
            for generic in &def.generic_params {
                for &constraint in &generic.constraints {
                    self.check(id, Some(constraint))?;
                }
            }
        }
        Ok(())
    }

    fn check(&self, referrer: TypeId, id: Option<TypeId>) -> Result<()> {
        match id {
            Some(id) if self.get(id).is_none() => Err(ModelError::UnknownTypeId { referrer, id }),
            _ => Ok(()),
        }
    }
}
