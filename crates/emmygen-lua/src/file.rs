use crate::tree::NamespaceTree;

/// One generated `.lua` stub file: meta header, provenance line, namespace
/// header, then every declaration separated by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaFile {
    pub assembly: String,
    pub namespace: Option<String>,
    pub declarations: Vec<String>,
}

impl LuaFile {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("---@meta\n");
        out.push_str(&format!("---Auto-generated from {}\n", self.assembly));
        let namespace = match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => "-",
        };
        out.push_str(&format!("---Namespace: {namespace}\n"));
        for decl in &self.declarations {
            out.push('\n');
            out.push_str(decl);
        }
        out.push('\n');
        out
    }
}

/// The `global.lua` companion: a meta header plus the nested `CS` namespace
/// table covering every selected type across all assemblies.
#[must_use]
pub fn render_global(tree: &NamespaceTree) -> String {
    let mut out = String::new();
    out.push_str("---@meta\n");
    out.push_str(&tree.render());
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_layout_separates_declarations_with_blank_lines() {
        let file = LuaFile {
            assembly: "Game.Core".into(),
            namespace: Some("Game".into()),
            declarations: vec![
                "---@class Game.Actor\nCS.Game.Actor = {}\n".into(),
                "---@enum Game.Color\nCS.Game.Color = {\n    Red = 0\n}\n".into(),
            ],
        };
        assert_eq!(
            file.render(),
            "---@meta\n\
             ---Auto-generated from Game.Core\n\
             ---Namespace: Game\n\
             \n\
             ---@class Game.Actor\n\
             CS.Game.Actor = {}\n\
             \n\
             ---@enum Game.Color\n\
             CS.Game.Color = {\n    Red = 0\n}\n\
             \n"
        );
    }

    #[test]
    fn missing_namespace_renders_dash() {
        let file = LuaFile {
            assembly: "Game.Core".into(),
            namespace: None,
            declarations: Vec::new(),
        };
        assert_eq!(
            file.render(),
            "---@meta\n---Auto-generated from Game.Core\n---Namespace: -\n\n"
        );
    }

    #[test]
    fn global_file_wraps_the_tree() {
        let mut tree = NamespaceTree::new();
        tree.insert(Some("Game"));
        assert_eq!(
            render_global(&tree),
            "---@meta\nCS = {\n    Game = {}\n}\n"
        );
    }
}
