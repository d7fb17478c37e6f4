use emmygen_map::{MapCaches, MapError, TypeMapper};
use emmygen_model::{TypeDeclaration, TypeId, TypeKind, TypeStore};
use thiserror::Error;

use crate::collect::{collect_class, collect_enum};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to generate type {id}: {source}")]
pub struct GenError {
    pub id: TypeId,
    #[source]
    pub source: MapError,
}

/// One generation session over a single dump.
///
/// The session owns the mapper caches, so every type generated through it
/// shares qualified-name and mapping results.
pub struct Generator<'a> {
    store: &'a TypeStore,
    caches: MapCaches,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(store: &'a TypeStore) -> Self {
        Generator {
            store,
            caches: MapCaches::new(),
        }
    }

    #[must_use]
    pub fn mapper(&self) -> TypeMapper<'_> {
        TypeMapper::new(self.store, &self.caches)
    }

    /// Produces the finished annotation block for one type. Errors are
    /// contained per type; a failed type never poisons the session.
    pub fn generate(&self, id: TypeId) -> Result<TypeDeclaration, GenError> {
        self.generate_inner(id)
            .map_err(|source| GenError { id, source })
    }

    /// Generates every id in order without short-circuiting on failures.
    pub fn generate_many(&self, ids: &[TypeId]) -> Vec<Result<TypeDeclaration, GenError>> {
        ids.iter().map(|&id| self.generate(id)).collect()
    }

    fn generate_inner(&self, id: TypeId) -> Result<TypeDeclaration, MapError> {
        let mapper = self.mapper();
        let def = mapper.lookup(id)?;
        let (qualified_name, text) = match &def.kind {
            TypeKind::Enum { members } => {
                let rendered = collect_enum(&mapper, id, members)?;
                (rendered.name.clone(), rendered.render())
            }
            _ => {
                let rendered = collect_class(&mapper, id)?;
                (rendered.name.clone(), rendered.render())
            }
        };
        Ok(TypeDeclaration {
            qualified_name,
            namespace: def.namespace.clone(),
            text,
        })
    }
}
