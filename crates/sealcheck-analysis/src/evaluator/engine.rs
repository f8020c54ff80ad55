//! Per-unit evaluator: decides each declaration once and records violations.

use sealcheck_core::{node_span, unit_span};

use super::decision::{Decision, EvaluationStats, UnitReport, Violation};
use super::policy::ImmutabilityPolicy;
use crate::cache::DecisionCache;
use crate::fix::{suggest, Fix};
use crate::identifiers::{identifier_text, identifier_texts, name_node};
use crate::lattice::{compare, max_level_hint};
use crate::oracle::{ClassifyRequest, ImmutabilityOracle};
use crate::overrides::{resolve, Resolution, TypeLocator};
use crate::syntax::{NodeId, NodeKind, SourceUnit, SyntaxTree, TypeInfo};

/// Evaluates declarations of one unit against a compiled policy.
///
/// Holds the unit's [`DecisionCache`]; a node evaluated twice yields the same
/// decision and is reported once.
pub struct Evaluator<'a> {
    policy: &'a ImmutabilityPolicy,
    unit: &'a SourceUnit,
    oracle: &'a dyn ImmutabilityOracle,
    locator: &'a dyn TypeLocator,
    cache: DecisionCache,
    violations: Vec<Violation>,
    stats: EvaluationStats,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        policy: &'a ImmutabilityPolicy,
        unit: &'a SourceUnit,
        oracle: &'a dyn ImmutabilityOracle,
        locator: &'a dyn TypeLocator,
    ) -> Self {
        Self {
            policy,
            unit,
            oracle,
            locator,
            cache: DecisionCache::new(),
            violations: Vec::new(),
            stats: EvaluationStats::default(),
        }
    }

    /// Decide one node, consulting the cache first.
    pub fn evaluate(&mut self, node: NodeId) -> Decision {
        if let Some(decision) = self.cache.lookup(node) {
            self.stats.cache_hits += 1;
            return decision;
        }

        let kind = self.unit.kind(node).map_or("missing", NodeKind::kind_name);
        let _span = node_span!(node, kind).entered();
        let decision = self.decide(node);
        tracing::debug!(?node, decision = decision_name(&decision), "declaration evaluated");

        self.stats.record(&decision);
        if let Decision::Violation(violation) = &decision {
            self.violations.push(violation.clone());
        }
        self.cache.insert(node, decision.clone());
        decision
    }

    pub fn check_type_alias(&mut self, node: NodeId) -> Decision {
        match self.unit.kind(node) {
            Some(NodeKind::TypeAliasDeclaration { .. }) => self.evaluate(node),
            _ => Decision::NoRuleApplies,
        }
    }

    pub fn check_interface(&mut self, node: NodeId) -> Decision {
        match self.unit.kind(node) {
            Some(NodeKind::InterfaceDeclaration { .. }) => self.evaluate(node),
            _ => Decision::NoRuleApplies,
        }
    }

    /// Evaluate every type alias and interface of the unit.
    pub fn run(mut self) -> UnitReport {
        let unit = self.unit;
        let _span = unit_span!(unit.path).entered();
        for node in unit.type_declarations() {
            self.evaluate(node);
        }
        self.into_report()
    }

    pub fn into_report(self) -> UnitReport {
        UnitReport {
            path: self.unit.path.clone(),
            violations: self.violations,
            stats: self.stats,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn stats(&self) -> &EvaluationStats {
        &self.stats
    }

    pub fn cache(&self) -> &DecisionCache {
        &self.cache
    }

    fn decide(&self, node: NodeId) -> Decision {
        if !self.policy.enabled {
            return Decision::Disabled;
        }
        let tree = &self.unit.tree;
        let ty = type_of(tree, node);

        let options = match resolve(
            &self.policy.base,
            &self.policy.overrides,
            self.unit,
            ty,
            self.locator,
        ) {
            Resolution::Disabled { index } => {
                tracing::trace!(index, "disabled by override");
                return Decision::Disabled;
            }
            Resolution::Options(options) => options,
        };

        let texts = identifier_texts(tree, node);
        if options.ignore.should_ignore(tree, node, &texts) {
            return Decision::Ignored;
        }

        let Some(rule) = options.rules.resolve(&texts) else {
            return Decision::NoRuleApplies;
        };

        let actual = self.oracle.classify(&ClassifyRequest {
            unit: self.unit,
            node,
            ty,
            overrides: &self.policy.level_overrides,
            use_cache: true,
            max_level: max_level_hint(rule.expected, rule.comparator),
        });
        if compare(actual, rule.expected, rule.comparator, self.policy.unknown_policy) {
            return Decision::Valid;
        }

        let name = name_node(tree, node);
        let (fix, suggestions) = match fix_target(tree, node).and_then(|t| tree.span(t)) {
            Some(span) => {
                let text = tree.slice(span);
                let fix = rule
                    .fixer
                    .synthesize(text)
                    .map(|replacement| Fix { span, replacement });
                let suggestions = suggest(&rule.suggestions, text)
                    .into_iter()
                    .map(|replacement| Fix { span, replacement })
                    .collect();
                (fix, suggestions)
            }
            None => (None, Vec::new()),
        };

        Decision::Violation(Violation {
            node,
            span: tree.span(name).unwrap_or_default(),
            identifier: identifier_text(tree, name),
            rule_index: rule.index,
            comparator: rule.comparator,
            actual,
            expected: rule.expected,
            fix,
            suggestions,
        })
    }
}

/// The declaration's known type: on the node itself, its name, or its type node.
fn type_of(tree: &SyntaxTree, node: NodeId) -> Option<&TypeInfo> {
    tree.type_of(node)
        .or_else(|| tree.type_of(name_node(tree, node)))
        .or_else(|| fix_target(tree, node).and_then(|t| tree.type_of(t)))
}

/// The type node whose text a fix rewrites. Interfaces have none.
fn fix_target(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    match tree.kind(node)? {
        NodeKind::TypeAliasDeclaration { type_node, .. } => Some(*type_node),
        NodeKind::TypeAnnotation { type_node } => Some(*type_node),
        NodeKind::VariableDeclarator {
            type_annotation, ..
        }
        | NodeKind::PropertyDefinition {
            type_annotation, ..
        }
        | NodeKind::PropertySignature {
            type_annotation, ..
        } => type_annotation.and_then(|a| fix_target(tree, a)),
        NodeKind::VariableDeclaration { declarations } if declarations.len() == 1 => {
            fix_target(tree, declarations[0])
        }
        _ => None,
    }
}

fn decision_name(decision: &Decision) -> &'static str {
    match decision {
        Decision::Disabled => "disabled",
        Decision::Ignored => "ignored",
        Decision::NoRuleApplies => "no_rule_applies",
        Decision::Valid => "valid",
        Decision::Violation(_) => "violation",
    }
}
