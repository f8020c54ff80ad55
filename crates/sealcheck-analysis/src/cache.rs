//! Per-unit memo of decisions, keyed by node identity.

use sealcheck_core::types::collections::FxHashMap;

use crate::evaluator::Decision;
use crate::syntax::NodeId;

/// Owned by one [`Evaluator`](crate::evaluator::Evaluator) for one unit and
/// dropped with it.
#[derive(Debug, Default)]
pub struct DecisionCache {
    entries: FxHashMap<NodeId, Decision>,
    hits: u64,
    misses: u64,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the cached decision, counting the hit or miss.
    pub fn lookup(&mut self, node: NodeId) -> Option<Decision> {
        match self.entries.get(&node) {
            Some(decision) => {
                self.hits += 1;
                Some(decision.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, node: NodeId, decision: Decision) {
        self.entries.insert(node, decision);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
