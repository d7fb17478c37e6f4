/// Visibility attached to a rendered member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LuaAccess {
    #[default]
    Public,
    Private,
    Protected,
    Package,
}

impl LuaAccess {
    /// Tag for the `---@<tag>` visibility line; public members carry none.
    #[must_use]
    pub fn annotation(self) -> Option<&'static str> {
        match self {
            LuaAccess::Public => None,
            LuaAccess::Private => Some("private"),
            LuaAccess::Protected => Some("protected"),
            LuaAccess::Package => Some("package"),
        }
    }
}
