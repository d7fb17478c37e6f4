use std::collections::BTreeMap;

/// Nested namespace index rendered into `global.lua` as a Lua table.
///
/// Children are kept sorted by segment name so the rendered table is stable
/// across runs regardless of selection order.
#[derive(Debug, Default)]
pub struct NamespaceTree {
    children: BTreeMap<String, NamespaceTree>,
}

impl NamespaceTree {
    #[must_use]
    pub fn new() -> Self {
        NamespaceTree::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Records one dotted namespace path. Empty or missing namespaces are
    /// skipped; the root table always renders.
    pub fn insert(&mut self, namespace: Option<&str>) {
        let Some(namespace) = namespace else { return };
        if namespace.is_empty() {
            return;
        }
        let mut node = self;
        for segment in namespace.split('.') {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    /// Renders the root `CS` table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node("CS", true, 0, &mut out);
        out
    }

    fn render_node(&self, name: &str, last: bool, depth: usize, out: &mut String) {
        let indent = depth * 4;
        let comma = if last { "" } else { "," };
        if self.children.is_empty() {
            out.push_str(&format!("{:indent$}{name} = {{}}{comma}\n", ""));
            return;
        }
        out.push_str(&format!("{:indent$}{name} = {{\n", ""));
        let count = self.children.len();
        for (i, (child_name, child)) in self.children.iter().enumerate() {
            child.render_node(child_name, i + 1 == count, depth + 1, out);
        }
        out.push_str(&format!("{:indent$}}}{comma}\n", ""));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_tree_renders_bare_root() {
        assert_eq!(NamespaceTree::new().render(), "CS = {}\n");
    }

    #[test]
    fn siblings_sort_and_only_last_omits_comma() {
        let mut tree = NamespaceTree::new();
        tree.insert(Some("Game.Units"));
        tree.insert(Some("Audio"));
        tree.insert(Some("Game.Items"));
        assert_eq!(
            tree.render(),
            "CS = {\n\
             \x20   Audio = {},\n\
             \x20   Game = {\n\
             \x20       Items = {},\n\
             \x20       Units = {}\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn empty_namespace_is_skipped() {
        let mut tree = NamespaceTree::new();
        tree.insert(None);
        tree.insert(Some(""));
        tree.insert(Some("Game"));
        assert_eq!(tree.render(), "CS = {\n    Game = {}\n}\n");
    }

    #[test]
    fn duplicate_paths_collapse() {
        let mut tree = NamespaceTree::new();
        tree.insert(Some("Game.Units"));
        tree.insert(Some("Game.Units"));
        assert_eq!(
            tree.render(),
            "CS = {\n    Game = {\n        Units = {}\n    }\n}\n"
        );
    }
}
