//! Programmatic construction of input units.
//!
//! The builder writes TypeScript-shaped source text and the matching nodes in one
//! pass, so every span points at real text. Hosts with their own parser use
//! [`SyntaxTree::try_push`] instead.

use super::tree::{NodeId, NodeKind, Span, SyntaxTree};
use super::types::TypeInfo;
use super::unit::SourceUnit;

/// Incrementally builds a [`SourceUnit`].
pub struct UnitBuilder {
    path: String,
    tree: SyntaxTree,
    body: Vec<NodeId>,
}

impl UnitBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tree: SyntaxTree::new(String::new()),
            body: Vec::new(),
        }
    }

    /// `type {name} = {type_text};`
    pub fn type_alias(&mut self, name: &str, type_text: &str) -> NodeId {
        let start = self.pos();
        self.write("type ");
        let id = self.identifier(name);
        self.write(" = ");
        let type_node = self.type_node(type_text);
        self.write(";");
        let decl = self.push(NodeKind::TypeAliasDeclaration { id, type_node }, start);
        self.end_statement(decl)
    }

    /// `interface {name} { key: T; ... }`
    pub fn interface(&mut self, name: &str, members: &[(&str, &str)]) -> NodeId {
        let start = self.pos();
        self.write("interface ");
        let id = self.identifier(name);
        self.write(" {");
        let mut signatures = Vec::with_capacity(members.len());
        for (key_name, type_text) in members {
            self.write(" ");
            let member_start = self.pos();
            let key = self.identifier(key_name);
            let annotation = self.annotation(type_text);
            self.write(";");
            signatures.push(self.push(
                NodeKind::PropertySignature {
                    key,
                    type_annotation: Some(annotation),
                },
                member_start,
            ));
        }
        self.write(" }");
        let decl = self.push(
            NodeKind::InterfaceDeclaration {
                id,
                members: signatures,
            },
            start,
        );
        self.end_statement(decl)
    }

    /// `const a: T, b;`, one declarator per entry, annotation optional.
    pub fn variable(&mut self, declarators: &[(&str, Option<&str>)]) -> NodeId {
        let start = self.pos();
        self.write("const ");
        let mut nodes = Vec::with_capacity(declarators.len());
        for (i, (name, type_text)) in declarators.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            let declarator_start = self.pos();
            let id = self.identifier(name);
            let type_annotation = type_text.map(|text| self.annotation(text));
            nodes.push(self.push(
                NodeKind::VariableDeclarator {
                    id,
                    type_annotation,
                    init: None,
                },
                declarator_start,
            ));
        }
        self.write(";");
        let decl = self.push(
            NodeKind::VariableDeclaration {
                declarations: nodes,
            },
            start,
        );
        self.end_statement(decl)
    }

    /// `class {name} { field: T; ... }`. Returns the class and its fields.
    pub fn class(&mut self, name: &str, fields: &[(&str, &str)]) -> (NodeId, Vec<NodeId>) {
        let start = self.pos();
        self.write("class ");
        let id = self.identifier(name);
        self.write(" {");
        let mut members = Vec::with_capacity(fields.len());
        for (key_name, type_text) in fields {
            self.write(" ");
            let member_start = self.pos();
            let key = self.identifier(key_name);
            let annotation = self.annotation(type_text);
            self.write(";");
            members.push(self.push(
                NodeKind::PropertyDefinition {
                    key,
                    type_annotation: Some(annotation),
                    value: None,
                },
                member_start,
            ));
        }
        self.write(" }");
        let decl = self.push(
            NodeKind::ClassDeclaration {
                id: Some(id),
                members: members.clone(),
            },
            start,
        );
        (self.end_statement(decl), members)
    }

    /// Attach the statically known type of a node.
    pub fn set_type(&mut self, id: NodeId, ty: TypeInfo) -> &mut Self {
        self.tree.set_type(id, ty);
        self
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Close the program node and hand out the unit.
    pub fn finish(mut self) -> SourceUnit {
        let span = Span::new(0, self.tree.source.len());
        let body = std::mem::take(&mut self.body);
        self.tree.push(NodeKind::Program { body }, span);
        SourceUnit::new(self.path, self.tree)
    }

    fn pos(&self) -> usize {
        self.tree.source.len()
    }

    fn write(&mut self, text: &str) -> Span {
        let start = self.pos();
        self.tree.source.push_str(text);
        Span::new(start, self.pos())
    }

    fn push(&mut self, kind: NodeKind, start: usize) -> NodeId {
        let span = Span::new(start, self.pos());
        self.tree.push(kind, span)
    }

    fn end_statement(&mut self, decl: NodeId) -> NodeId {
        self.write("\n");
        self.body.push(decl);
        decl
    }

    fn identifier(&mut self, name: &str) -> NodeId {
        let span = self.write(name);
        self.tree.push(
            NodeKind::Identifier {
                name: name.to_string(),
            },
            span,
        )
    }

    fn type_node(&mut self, text: &str) -> NodeId {
        let span = self.write(text);
        self.tree.push(NodeKind::Type, span)
    }

    fn annotation(&mut self, type_text: &str) -> NodeId {
        let start = self.pos();
        self.write(": ");
        let type_node = self.type_node(type_text);
        self.push(NodeKind::TypeAnnotation { type_node }, start)
    }
}
