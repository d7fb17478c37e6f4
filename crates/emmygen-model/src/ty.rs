use serde::{Deserialize, Serialize};

use crate::members::{CtorDef, EnumMemberDef, FieldDef, GenericParamDef, MethodDef, PropertyDef};

/// Index of a type in its dump's type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    #[must_use]
    pub fn new(raw: u32) -> Self {
        TypeId(raw)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive categories that map directly to a Lua annotation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    Boolean,
    Integer,
    Number,
    #[serde(rename = "string")]
    Str,
    /// Pointer-sized and other host-only primitives with no Lua equivalent.
    Opaque,
}

/// Well-known generic definitions the dump producer recognizes by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialShape {
    Nullable,
    ListLike,
    DictLike,
    Awaitable,
    Enumerable,
    Enumerator,
}

/// Which declaration a generic parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenericParamOwner {
    Method,
    Type,
}

/// Structural classification of a type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeKind {
    /// Class, struct, or interface with no special structure.
    Ordinary,
    Scalar {
        scalar: ScalarKind,
    },
    Void,
    #[serde(rename_all = "camelCase")]
    Enum {
        members: Vec<EnumMemberDef>,
    },
    #[serde(rename_all = "camelCase")]
    Array {
        element: TypeId,
    },
    #[serde(rename_all = "camelCase")]
    ByRef {
        referent: TypeId,
    },
    Delegate,
    #[serde(rename_all = "camelCase")]
    GenericInstance {
        definition: TypeId,
        args: Vec<TypeId>,
    },
    #[serde(rename_all = "camelCase")]
    GenericParam {
        owner: GenericParamOwner,
    },
}

/// One reflected type.
///
/// `declaring` links a nested type to its enclosing type; `base` and
/// `interfaces` describe the inheritance graph. Member lists hold only what
/// the walker saw declared on this type, never inherited members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub declaring: Option<TypeId>,
    #[serde(flatten)]
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<TypeId>,
    #[serde(default)]
    pub interfaces: Vec<TypeId>,
    #[serde(default)]
    pub shape: Option<SpecialShape>,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub is_class: bool,
    /// True for open generic definitions (`List<T>` itself, not `List<int>`).
    #[serde(default)]
    pub is_generic: bool,
    #[serde(default)]
    pub is_compiler_generated: bool,
    #[serde(default)]
    pub is_special_name: bool,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub constructors: Vec<CtorDef>,
    #[serde(default)]
    pub generic_params: Vec<GenericParamDef>,
}

impl TypeDef {
    /// Bare record with the given name and kind; everything else empty.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDef {
            name: name.into(),
            namespace: None,
            declaring: None,
            kind,
            base: None,
            interfaces: Vec::new(),
            shape: None,
            is_interface: false,
            is_class: false,
            is_generic: false,
            is_compiler_generated: false,
            is_special_name: false,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            generic_params: Vec::new(),
        }
    }

    /// True for generic definitions and for instantiations of them.
    #[must_use]
    pub fn is_generic_type(&self) -> bool {
        self.is_generic || matches!(self.kind, TypeKind::GenericInstance { .. })
    }
}
