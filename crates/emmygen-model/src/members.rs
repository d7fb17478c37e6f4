use serde::{Deserialize, Serialize};

use crate::ty::TypeId;

/// Member visibility as reported by the dump producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Access {
    Public,
    Private,
    Protected,
    Package,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMemberDef {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeId,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_compiler_generated: bool,
    #[serde(default)]
    pub is_special_name: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    pub name: String,
    pub ty: TypeId,
    #[serde(default)]
    pub access: Access,
    /// Index parameters; non-empty for indexers.
    #[serde(default)]
    pub index_params: Vec<ParamDef>,
    #[serde(default)]
    pub is_compiler_generated: bool,
    /// True when an accessor overrides a base definition. The walk uses this
    /// to hide the base declaration of the same property.
    #[serde(default)]
    pub overrides_base: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_compiler_generated: bool,
    #[serde(default)]
    pub is_special_name: bool,
    /// Set when the method body carries an async state-machine marker, even
    /// if the declared return type is not awaitable.
    #[serde(default)]
    pub has_async_marker: bool,
    pub return_type: TypeId,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default)]
    pub generic_params: Vec<GenericParamDef>,
}

impl MethodDef {
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtorDef {
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub params: Vec<ParamDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDef {
    #[serde(default)]
    pub name: Option<String>,
    pub ty: TypeId,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericParamDef {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<TypeId>,
    #[serde(default)]
    pub has_reference_constraint: bool,
}
