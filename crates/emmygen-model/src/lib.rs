#![forbid(unsafe_code)]

//! Data model for reflection dumps.
//!
//! A dump is a pre-walked snapshot of an assembly's type system: every type
//! the walker reached gets a [`TypeDef`] record, and every cross-type
//! reference is a [`TypeId`] index into the dump's type table. This crate
//! owns the serde document format, the arena the rest of the pipeline reads
//! from, and the structured output records the generator produces.

mod dump;
mod members;
mod output;
mod store;
mod ty;

pub use dump::ReflectionDump;
pub use members::{
    Access, CtorDef, EnumMemberDef, FieldDef, GenericParamDef, MethodDef, ParamDef, PropertyDef,
};
pub use output::{MappedType, TypeDeclaration};
pub use store::{ModelError, Result, TypeStore};
pub use ty::{GenericParamOwner, ScalarKind, SpecialShape, TypeDef, TypeId, TypeKind};
