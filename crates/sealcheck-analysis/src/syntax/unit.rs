//! One input unit (typically one file).

use super::tree::{NodeId, NodeKind, SyntaxTree};

/// A file's path and syntax, the scope of one evaluator and its cache.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: String,
    pub tree: SyntaxTree,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, tree: SyntaxTree) -> Self {
        Self {
            path: path.into(),
            tree,
        }
    }

    /// Type alias and interface declarations, in arena order.
    pub fn type_declarations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .iter()
            .filter(|(_, node)| node.kind.is_type_declaration())
            .map(|(id, _)| id)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.tree.kind(id)
    }
}
