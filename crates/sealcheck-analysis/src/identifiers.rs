//! Canonical identifier texts of a node.

use smallvec::SmallVec;

use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Texts naming a node. More than one only for multi-binding declarations.
pub type IdentifierTexts = SmallVec<[String; 1]>;

/// All identifier texts of a node.
pub fn identifier_texts(tree: &SyntaxTree, node: NodeId) -> IdentifierTexts {
    match tree.kind(node) {
        Some(NodeKind::VariableDeclaration { declarations }) => declarations
            .iter()
            .filter_map(|d| identifier_text(tree, *d))
            .collect(),
        Some(
            NodeKind::TypeAliasDeclaration { id, .. } | NodeKind::InterfaceDeclaration { id, .. },
        ) => identifier_text(tree, *id).into_iter().collect(),
        _ => identifier_text(tree, node).into_iter().collect(),
    }
}

/// The single text naming a node, if it has one.
///
/// Only descends into children, or into the sibling key of a property whose
/// value is `node`.
pub fn identifier_text(tree: &SyntaxTree, node: NodeId) -> Option<String> {
    let kind = tree.kind(node)?;
    match kind {
        NodeKind::Identifier { name } | NodeKind::PrivateIdentifier { name } => {
            return Some(name.clone())
        }
        _ => {}
    }

    if let Some(id) = declared_id(kind) {
        return identifier_text(tree, id);
    }

    match kind {
        NodeKind::PropertyDefinition { key, .. }
        | NodeKind::PropertySignature { key, .. }
        | NodeKind::Property { key, .. } => identifier_text(tree, *key),
        NodeKind::AssignmentExpression { left, .. } => identifier_text(tree, *left),
        NodeKind::MemberExpression { object, property } => {
            let object = identifier_text(tree, *object)?;
            let property = identifier_text(tree, *property)?;
            Some(format!("{object}.{property}"))
        }
        NodeKind::ThisExpression => Some("this".to_string()),
        NodeKind::UnaryExpression { argument } => identifier_text(tree, *argument),
        NodeKind::TypeAnnotation { type_node } => {
            Some(strip_whitespace(tree.text(*type_node)))
        }
        _ => object_literal_key(tree, node).and_then(|key| identifier_text(tree, key)),
    }
}

/// The node that names a declaration, used as the report anchor.
pub fn name_node(tree: &SyntaxTree, node: NodeId) -> NodeId {
    match tree.kind(node) {
        Some(NodeKind::VariableDeclaration { declarations }) => declarations
            .first()
            .map(|d| name_node(tree, *d))
            .unwrap_or(node),
        Some(
            NodeKind::PropertyDefinition { key, .. }
            | NodeKind::PropertySignature { key, .. }
            | NodeKind::Property { key, .. },
        ) => *key,
        Some(kind) => declared_id(kind).unwrap_or(node),
        None => node,
    }
}

fn declared_id(kind: &NodeKind) -> Option<NodeId> {
    match kind {
        NodeKind::TypeAliasDeclaration { id, .. }
        | NodeKind::InterfaceDeclaration { id, .. }
        | NodeKind::VariableDeclarator { id, .. } => Some(*id),
        NodeKind::ClassDeclaration { id, .. } | NodeKind::FunctionDeclaration { id, .. } => *id,
        _ => None,
    }
}

/// Key of the property whose value is `node`, when that property sits in an
/// object literal.
fn object_literal_key(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    let parent = tree.parent(node)?;
    let NodeKind::Property { key, value } = tree.kind(parent)? else {
        return None;
    };
    if *value != node || *key == node {
        return None;
    }
    let grandparent = tree.parent(parent)?;
    matches!(tree.kind(grandparent)?, NodeKind::ObjectExpression { .. }).then_some(*key)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
