//! Arena-backed syntax tree handed to the engine by the host.
//!
//! Children are pushed before their parents, so a child's [`NodeId`] is always
//! smaller than its parent's. Node identity is the arena index: stable for the
//! lifetime of the tree and cheap to hash.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use sealcheck_core::types::collections::FxHashMap;

use super::types::TypeInfo;

/// Index of a node in its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range into the unit's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Node kinds the engine distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Program { body: Vec<NodeId> },
    Identifier { name: String },
    PrivateIdentifier { name: String },

    // ---- Declarations ----
    TypeAliasDeclaration { id: NodeId, type_node: NodeId },
    InterfaceDeclaration { id: NodeId, members: Vec<NodeId> },
    ClassDeclaration { id: Option<NodeId>, members: Vec<NodeId> },
    FunctionDeclaration { id: Option<NodeId>, params: Vec<NodeId> },
    VariableDeclaration { declarations: Vec<NodeId> },
    VariableDeclarator {
        id: NodeId,
        type_annotation: Option<NodeId>,
        init: Option<NodeId>,
    },

    // ---- Types ----
    /// `: T`, wrapping the type node.
    TypeAnnotation { type_node: NodeId },
    /// Any type expression; its text is its source span.
    Type,

    // ---- Members ----
    PropertyDefinition {
        key: NodeId,
        type_annotation: Option<NodeId>,
        value: Option<NodeId>,
    },
    PropertySignature {
        key: NodeId,
        type_annotation: Option<NodeId>,
    },

    // ---- Expressions ----
    ObjectExpression { properties: Vec<NodeId> },
    Property { key: NodeId, value: NodeId },
    AssignmentExpression { left: NodeId, right: NodeId },
    MemberExpression { object: NodeId, property: NodeId },
    ThisExpression,
    UnaryExpression { argument: NodeId },
    Literal,

    // ---- Catch-all ----
    Other { kind: String, children: Vec<NodeId> },
}

impl NodeKind {
    /// Direct children, in source order.
    pub fn children(&self) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        match self {
            Self::Program { body } => out.extend(body.iter().copied()),
            Self::Identifier { .. }
            | Self::PrivateIdentifier { .. }
            | Self::Type
            | Self::ThisExpression
            | Self::Literal => {}
            Self::TypeAliasDeclaration { id, type_node } => {
                out.push(*id);
                out.push(*type_node);
            }
            Self::InterfaceDeclaration { id, members } => {
                out.push(*id);
                out.extend(members.iter().copied());
            }
            Self::ClassDeclaration { id, members } => {
                out.extend(id.iter().copied());
                out.extend(members.iter().copied());
            }
            Self::FunctionDeclaration { id, params } => {
                out.extend(id.iter().copied());
                out.extend(params.iter().copied());
            }
            Self::VariableDeclaration { declarations } => {
                out.extend(declarations.iter().copied())
            }
            Self::VariableDeclarator {
                id,
                type_annotation,
                init,
            } => {
                out.push(*id);
                out.extend(type_annotation.iter().copied());
                out.extend(init.iter().copied());
            }
            Self::TypeAnnotation { type_node } => out.push(*type_node),
            Self::PropertyDefinition {
                key,
                type_annotation,
                value,
            } => {
                out.push(*key);
                out.extend(type_annotation.iter().copied());
                out.extend(value.iter().copied());
            }
            Self::PropertySignature {
                key,
                type_annotation,
            } => {
                out.push(*key);
                out.extend(type_annotation.iter().copied());
            }
            Self::ObjectExpression { properties } => out.extend(properties.iter().copied()),
            Self::Property { key, value } => {
                out.push(*key);
                out.push(*value);
            }
            Self::AssignmentExpression { left, right } => {
                out.push(*left);
                out.push(*right);
            }
            Self::MemberExpression { object, property } => {
                out.push(*object);
                out.push(*property);
            }
            Self::UnaryExpression { argument } => out.push(*argument),
            Self::Other { children, .. } => out.extend(children.iter().copied()),
        }
        out
    }

    /// Get the kind name of this node.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Program { .. } => "program",
            Self::Identifier { .. } => "identifier",
            Self::PrivateIdentifier { .. } => "private_identifier",
            Self::TypeAliasDeclaration { .. } => "type_alias_declaration",
            Self::InterfaceDeclaration { .. } => "interface_declaration",
            Self::ClassDeclaration { .. } => "class_declaration",
            Self::FunctionDeclaration { .. } => "function_declaration",
            Self::VariableDeclaration { .. } => "variable_declaration",
            Self::VariableDeclarator { .. } => "variable_declarator",
            Self::TypeAnnotation { .. } => "type_annotation",
            Self::Type => "type",
            Self::PropertyDefinition { .. } => "property_definition",
            Self::PropertySignature { .. } => "property_signature",
            Self::ObjectExpression { .. } => "object_expression",
            Self::Property { .. } => "property",
            Self::AssignmentExpression { .. } => "assignment_expression",
            Self::MemberExpression { .. } => "member_expression",
            Self::ThisExpression => "this_expression",
            Self::UnaryExpression { .. } => "unary_expression",
            Self::Literal => "literal",
            Self::Other { kind, .. } => kind.as_str(),
        }
    }

    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            Self::TypeAliasDeclaration { .. } | Self::InterfaceDeclaration { .. }
        )
    }
}

/// A node plus its position and parent link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
}

/// Errors raised while a host assembles a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("child {child:?} does not exist yet (tree has {len} nodes)")]
    DanglingChild { child: NodeId, len: usize },

    #[error("child {child:?} already belongs to {parent:?}")]
    Reparented { child: NodeId, parent: NodeId },

    #[error("child {child:?} is listed more than once")]
    DuplicateChild { child: NodeId },

    #[error("span {start}..{end} is outside the source ({len} bytes)")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

/// The syntax of one input unit: source text, node arena and known types.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    pub(crate) source: String,
    nodes: Vec<SyntaxNode>,
    types: FxHashMap<NodeId, TypeInfo>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Append a node whose children were all pushed earlier.
    pub fn try_push(&mut self, kind: NodeKind, span: Span) -> Result<NodeId, TreeError> {
        let len = self.nodes.len();
        if span.start > span.end || span.end > self.source.len() {
            return Err(TreeError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                len: self.source.len(),
            });
        }
        let children = kind.children();
        for (i, child) in children.iter().enumerate() {
            if children[..i].contains(child) {
                return Err(TreeError::DuplicateChild { child: *child });
            }
            match self.nodes.get(child.index()) {
                None => return Err(TreeError::DanglingChild { child: *child, len }),
                Some(node) => {
                    if let Some(parent) = node.parent {
                        return Err(TreeError::Reparented {
                            child: *child,
                            parent,
                        });
                    }
                }
            }
        }
        Ok(self.attach(kind, span, &children))
    }

    /// Append a node built by this crate, where the invariants hold by construction.
    pub(crate) fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let children = kind.children();
        self.attach(kind, span, &children)
    }

    fn attach(&mut self, kind: NodeKind, span: Span, children: &[NodeId]) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in children {
            if let Some(node) = self.nodes.get_mut(child.index()) {
                node.parent = Some(id);
            }
        }
        if matches!(kind, NodeKind::Program { .. }) {
            self.root = Some(id);
        }
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.get(id).map(|n| n.span)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text covered by `span`; empty if the span is not on a char boundary.
    pub fn slice(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or("")
    }

    /// Source text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        self.span(id).map(|s| self.slice(s)).unwrap_or("")
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach the statically known type of a node.
    pub fn set_type(&mut self, id: NodeId, ty: TypeInfo) {
        self.types.insert(id, ty);
    }

    pub fn type_of(&self, id: NodeId) -> Option<&TypeInfo> {
        self.types.get(&id)
    }
}
