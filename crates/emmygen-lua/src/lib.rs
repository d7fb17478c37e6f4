#![forbid(unsafe_code)]

//! Annotation records and text rendering for EmmyLua/LuaLS stubs.
//!
//! Everything here is pure: records in, strings out. Upstream crates decide
//! which members exist and what their types map to; this crate only knows
//! how the annotation dialect is spelled.

mod access;
mod callable;
mod decl;
mod file;
mod keywords;
mod tree;

pub use access::LuaAccess;
pub use callable::{
    generic_annotations, param_annotations, parameter_list, LuaGenericParam, LuaParameter,
};
pub use decl::{
    LuaClass, LuaConstructor, LuaEnum, LuaEnumMember, LuaField, LuaFunction, LuaGenericMethod,
    LuaMethod, LuaOperator, LuaOverload, OperatorKind,
};
pub use file::{render_global, LuaFile};
pub use keywords::{escape_name, field_key, is_reserved};
pub use tree::NamespaceTree;
