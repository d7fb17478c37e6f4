#![forbid(unsafe_code)]

//! Maps reflected type references to Lua type expressions.
//!
//! The mapper is a thin view over a [`emmygen_model::TypeStore`] plus a pair
//! of run-scoped caches. Mapping the same id twice always yields the first
//! result, so concurrent generation over one dump stays deterministic.

mod caches;
mod error;
mod mapper;
mod params;
mod scalars;

pub use caches::MapCaches;
pub use error::{MapError, Result};
pub use mapper::TypeMapper;
pub use params::synthesize_params;
pub use scalars::{scalar_token, OPAQUE};
