#![forbid(unsafe_code)]

//! Turns selected types into finished annotation declarations.
//!
//! The collector walks a type's members and builds the renderable records
//! from `emmygen-lua`; the [`Generator`] session wraps that walk with the
//! run's shared mapper caches and per-type error containment.

mod collect;
mod generate;

pub use generate::{GenError, Generator};
