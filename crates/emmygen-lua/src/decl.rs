use crate::access::LuaAccess;
use crate::callable::{
    generic_annotations, param_annotations, parameter_list, LuaGenericParam, LuaParameter,
};

/// One `---@field` line of a class annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaField {
    pub name: String,
    pub ty: String,
    pub access: LuaAccess,
}

impl LuaField {
    #[must_use]
    pub fn render(&self) -> String {
        match self.access.annotation() {
            Some(tag) => format!("---@field {tag} {} {}", self.name, self.ty),
            None => format!("---@field {} {}", self.name, self.ty),
        }
    }
}

/// Metamethods the annotation dialect can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Unm,
}

impl OperatorKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OperatorKind::Add => "add",
            OperatorKind::Sub => "sub",
            OperatorKind::Mul => "mul",
            OperatorKind::Div => "div",
            OperatorKind::Unm => "unm",
        }
    }

    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(self, OperatorKind::Unm)
    }
}

/// One `---@operator` line of a class annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaOperator {
    pub kind: OperatorKind,
    /// Right-hand operand type; `None` for unary operators.
    pub operand: Option<String>,
    pub result: String,
}

impl LuaOperator {
    #[must_use]
    pub fn render(&self) -> String {
        match &self.operand {
            Some(operand) => {
                format!("---@operator {}({operand}): {}", self.kind.name(), self.result)
            }
            None => format!("---@operator {}: {}", self.kind.name(), self.result),
        }
    }
}

/// One `---@overload` line attached to a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaOverload {
    pub implicit_self: bool,
    pub params: Vec<LuaParameter>,
    /// Empty text marks a void return and suppresses the suffix.
    pub ret: String,
}

impl LuaOverload {
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if self.implicit_self {
            parts.push("self: self".to_string());
        }
        let list = parameter_list(&self.params, true);
        if !list.is_empty() {
            parts.push(list);
        }
        let ret = if self.ret.is_empty() {
            String::new()
        } else {
            format!(": {}", self.ret)
        };
        format!("---@overload fun({}){ret}", parts.join(", "))
    }
}

/// A plain method stub: annotation lines plus the `function ... end` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaMethod {
    pub class_name: String,
    pub name: String,
    pub implicit_self: bool,
    pub is_async: bool,
    pub access: LuaAccess,
    pub params: Vec<LuaParameter>,
    pub overloads: Vec<LuaOverload>,
    /// Empty text marks a void return and suppresses the `---@return` line.
    pub ret: String,
}

impl LuaMethod {
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with_generics(&[])
    }

    fn render_with_generics(&self, generics: &[LuaGenericParam]) -> String {
        let mut out = String::new();
        if let Some(tag) = self.access.annotation() {
            out.push_str(&format!("---@{tag}\n"));
        }
        if self.is_async {
            out.push_str("---@async\n");
        }
        generic_annotations(generics, &mut out);
        for overload in &self.overloads {
            out.push_str(&overload.render());
            out.push('\n');
        }
        param_annotations(&self.params, &mut out);
        if !self.ret.is_empty() {
            out.push_str(&format!("---@return {}\n", self.ret));
        }
        let call = if self.implicit_self { ":" } else { "." };
        out.push_str(&format!(
            "function CS.{}{call}{}({}) end\n",
            self.class_name,
            self.name,
            parameter_list(&self.params, false),
        ));
        out
    }
}

/// A method with method-scoped generic parameters; renders `---@generic`
/// lines in place of overloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaGenericMethod {
    pub method: LuaMethod,
    pub generics: Vec<LuaGenericParam>,
}

impl LuaGenericMethod {
    #[must_use]
    pub fn render(&self) -> String {
        self.method.render_with_generics(&self.generics)
    }
}

/// Either flavor of method stub, kept in declaration order inside a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LuaFunction {
    Method(LuaMethod),
    Generic(LuaGenericMethod),
}

impl LuaFunction {
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            LuaFunction::Method(m) => m.render(),
            LuaFunction::Generic(g) => g.render(),
        }
    }
}

/// Constructor stub; always returns the class and never takes `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaConstructor {
    pub class_name: String,
    pub access: LuaAccess,
    pub params: Vec<LuaParameter>,
    pub overloads: Vec<LuaOverload>,
}

impl LuaConstructor {
    /// Rendered without a trailing newline; the class renderer appends it.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(tag) = self.access.annotation() {
            out.push_str(&format!("---@{tag}\n"));
        }
        for overload in &self.overloads {
            out.push_str(&overload.render());
            out.push('\n');
        }
        param_annotations(&self.params, &mut out);
        out.push_str(&format!("---@return {}\n", self.class_name));
        out.push_str(&format!(
            "function CS.{}({}) end",
            self.class_name,
            parameter_list(&self.params, false),
        ));
        out
    }
}

/// A full `---@class` block with its member stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaClass {
    pub name: String,
    /// Pre-joined base list; `None` omits the suffix entirely.
    pub bases: Option<String>,
    pub fields: Vec<LuaField>,
    pub operators: Vec<LuaOperator>,
    pub functions: Vec<LuaFunction>,
    pub constructor: Option<LuaConstructor>,
}

impl LuaClass {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        match &self.bases {
            Some(bases) => out.push_str(&format!("---@class {}: {bases}\n", self.name)),
            None => out.push_str(&format!("---@class {}\n", self.name)),
        }
        for field in &self.fields {
            out.push_str(&field.render());
            out.push('\n');
        }
        for op in &self.operators {
            out.push_str(&op.render());
            out.push('\n');
        }
        out.push_str(&format!("CS.{} = {{}}\n", self.name));
        out.push('\n');
        for function in &self.functions {
            out.push_str(&function.render());
            out.push('\n');
        }
        if let Some(ctor) = &self.constructor {
            out.push_str(&ctor.render());
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaEnumMember {
    pub name: String,
    pub value: i64,
}

/// A `---@enum` block backed by a plain Lua table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaEnum {
    pub name: String,
    pub members: Vec<LuaEnumMember>,
}

impl LuaEnum {
    #[must_use]
    pub fn render(&self) -> String {
        let members: Vec<String> = self
            .members
            .iter()
            .map(|m| format!("    {} = {}", m.name, m.value))
            .collect();
        format!(
            "---@enum {}\nCS.{} = {{\n{}\n}}\n",
            self.name,
            self.name,
            members.join(",\n"),
        )
    }
}
