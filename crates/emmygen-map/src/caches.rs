use dashmap::DashMap;
use emmygen_model::{MappedType, TypeId};

/// Run-scoped memoization shared by every mapper over one dump.
///
/// Inserts are first-writer-wins: once an id has a value, later computations
/// of the same id are discarded in favor of the stored one.
#[derive(Debug, Default)]
pub struct MapCaches {
    pub(crate) qualified: DashMap<TypeId, String>,
    pub(crate) mapped: DashMap<TypeId, MappedType>,
}

impl MapCaches {
    #[must_use]
    pub fn new() -> Self {
        MapCaches::default()
    }
}
