//! Compiled rule options: the rule table plus the ignore predicate.

use sealcheck_core::config::RuleOptions;
use sealcheck_core::errors::ConfigError;

use crate::patterns::{AccessorPatternSet, PatternSet};
use crate::rules::RuleTable;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Options in effect for a declaration after override resolution.
#[derive(Debug, Clone)]
pub struct CompiledOptions {
    pub rules: RuleTable,
    pub ignore: IgnoreSpec,
}

impl CompiledOptions {
    pub fn compile(options: &RuleOptions, field: &str) -> Result<Self, ConfigError> {
        let rules = match &options.rules {
            Some(entries) => RuleTable::compile(entries, field)?,
            None => RuleTable::defaults()?,
        };

        let identifiers = options
            .ignore_identifier_pattern
            .as_ref()
            .map(|p| PatternSet::compile(p.as_slice()))
            .transpose()
            .map_err(|e| ConfigError::pattern(format!("{field}.ignore_identifier_pattern"), e))?;
        let accessors = options
            .ignore_accessor_pattern
            .as_ref()
            .map(|p| AccessorPatternSet::compile(p.as_slice()))
            .transpose()
            .map_err(|e| ConfigError::pattern(format!("{field}.ignore_accessor_pattern"), e))?;

        Ok(Self {
            rules,
            ignore: IgnoreSpec {
                identifiers,
                accessors,
                ignore_interfaces: options.ignore_interfaces.unwrap_or(false),
                ignore_classes: options.ignore_classes.unwrap_or(false),
            },
        })
    }
}

/// Structural and pattern-based exclusions.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    pub identifiers: Option<PatternSet>,
    pub accessors: Option<AccessorPatternSet>,
    pub ignore_interfaces: bool,
    /// Skip declarations nested inside a class.
    pub ignore_classes: bool,
}

impl IgnoreSpec {
    /// Pattern ignores need every text to match; a node with no texts is never
    /// ignored by pattern.
    pub fn should_ignore<S: AsRef<str>>(&self, tree: &SyntaxTree, node: NodeId, texts: &[S]) -> bool {
        if self.ignore_interfaces
            && matches!(tree.kind(node), Some(NodeKind::InterfaceDeclaration { .. }))
        {
            return true;
        }
        if self.ignore_classes
            && tree
                .ancestors(node)
                .any(|a| matches!(tree.kind(a), Some(NodeKind::ClassDeclaration { .. })))
        {
            return true;
        }
        if texts.is_empty() {
            return false;
        }
        self.identifiers
            .as_ref()
            .is_some_and(|p| p.matches_every(texts))
            || self
                .accessors
                .as_ref()
                .is_some_and(|p| p.matches_every(texts))
    }
}
