use emmygen_map::TypeMapper;
use emmygen_model::{TypeDef, TypeId, TypeStore};

use crate::wildcard::wildcard_matches;

/// Applies the configured filter list to every type in a store.
///
/// Generic, special-name, and compiler-generated types never qualify,
/// whatever the filters say. A lone `*` selects everything left; any other
/// filter is an exact qualified name unless it carries a `*` glob.
///
/// Returned ids keep the store's declaration order, so repeated runs over
/// the same dump select the same sequence.
pub fn select_types(mapper: &TypeMapper<'_>, filters: &[String]) -> Vec<TypeId> {
    let filters = dedup_filters(filters);
    let select_all = filters.iter().any(|f| *f == "*");
    let store = mapper.store();

    let mut selected = Vec::new();
    for (id, def) in store.iter() {
        if is_excluded(store, def) {
            continue;
        }
        if select_all {
            selected.push(id);
            continue;
        }
        let qualified = match mapper.qualified_name(id) {
            Ok(name) => name,
            Err(error) => {
                tracing::warn!(%id, %error, "skipping type with unresolvable name");
                continue;
            }
        };
        if filters.iter().any(|f| filter_matches(&qualified, f)) {
            selected.push(id);
        }
    }
    selected
}

fn filter_matches(qualified: &str, filter: &str) -> bool {
    if filter.contains('*') {
        wildcard_matches(qualified, filter)
    } else {
        qualified == filter
    }
}

fn dedup_filters(filters: &[String]) -> Vec<&String> {
    let mut kept: Vec<&String> = Vec::new();
    let mut duplicates: Vec<&String> = Vec::new();
    for filter in filters {
        if kept.contains(&filter) {
            if !duplicates.contains(&filter) {
                duplicates.push(filter);
            }
        } else {
            kept.push(filter);
        }
    }
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "dropping duplicate type filters");
    }
    kept
}

fn is_excluded(store: &TypeStore, def: &TypeDef) -> bool {
    def.is_generic_type() || def.is_special_name || is_compiler_generated(store, def)
}

/// A nested type inherits compiler-generated status from any enclosing type.
fn is_compiler_generated(store: &TypeStore, def: &TypeDef) -> bool {
    let mut seen = Vec::new();
    let mut current = def;
    loop {
        if current.is_compiler_generated {
            return true;
        }
        let Some(declaring) = current.declaring else {
            return false;
        };
        // Malformed declaring cycles stop the climb instead of spinning.
        if seen.contains(&declaring) {
            return false;
        }
        seen.push(declaring);
        match store.get(declaring) {
            Some(outer) => current = outer,
            None => return false,
        }
    }
}
