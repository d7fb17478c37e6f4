use serde::{Deserialize, Serialize};

use crate::store::{Result, TypeStore};
use crate::ty::{TypeDef, TypeId};

/// On-disk document produced by the dump walker for one assembly.
///
/// The `types` array is positional: the record at index `i` is the type
/// every `TypeId(i)` in the document refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionDump {
    pub assembly: String,
    /// Id of the root object type, when the walker recorded one.
    #[serde(default)]
    pub object: Option<TypeId>,
    pub types: Vec<TypeDef>,
}

impl ReflectionDump {
    /// Builds and validates the arena for this dump.
    pub fn into_store(self) -> Result<(String, TypeStore)> {
        let ReflectionDump {
            assembly,
            object,
            types,
        } = self;
        let mut store = TypeStore::new();
        for def in types {
            store.add_type(def);
        }
        if let Some(object) = object {
            store.set_object(object);
        }
        store.validate()?;
        Ok((assembly, store))
    }
}
