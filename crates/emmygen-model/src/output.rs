use serde::{Deserialize, Serialize};

/// A Lua type expression produced by the mapper.
///
/// `needs_parens` records whether the expression must be wrapped before it
/// is embedded in a larger expression (union and function types bind looser
/// than array suffixes and union separators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedType {
    pub text: String,
    pub needs_parens: bool,
}

impl MappedType {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        MappedType {
            text: text.into(),
            needs_parens: false,
        }
    }

    #[must_use]
    pub fn flagged(text: impl Into<String>) -> Self {
        MappedType {
            text: text.into(),
            needs_parens: true,
        }
    }

    /// The expression text, wrapped when embedding requires it.
    #[must_use]
    pub fn parenthesized(&self) -> String {
        if self.needs_parens {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }

    /// The empty expression marks `void`; callers suppress it entirely.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.text.is_empty()
    }
}

/// Finished annotation text for one selected type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub qualified_name: String,
    pub namespace: Option<String>,
    pub text: String,
}
