//! Transition graph — which edge may follow which.
//!
//! Built once from an ordered rule table. Rule keys may repeat: each entry
//! replaces whatever an earlier entry with the same key declared, so the
//! graph only ever sees the final declaration of every key.
//!
//! ```text
//! [(start, [a, b]), (a, [c]), (a, [d, c])]  ──build──►  start → [a, b]
//!                                                       a     → [d, c]
//! ```

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Edge, PointLabel, PointSet};
use crate::{Error, Result};

// ============================================================================
// Rule table entries
// ============================================================================

/// Left-hand side of a rule entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKey {
    /// The distinguished entry listing the edges a path may begin with.
    Start,
    /// Successors of a specific edge.
    Edge(Edge),
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKey::Start => f.write_str("start"),
            RuleKey::Edge(edge) => write!(f, "{edge}"),
        }
    }
}

/// One declaration in the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub key: RuleKey,
    pub successors: Vec<Edge>,
}

impl RuleEntry {
    pub fn start(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self { key: RuleKey::Start, successors: edges.into_iter().collect() }
    }

    pub fn edge(edge: impl Into<Edge>, successors: impl IntoIterator<Item = Edge>) -> Self {
        Self { key: RuleKey::Edge(edge.into()), successors: successors.into_iter().collect() }
    }
}

// ============================================================================
// TransitionGraph
// ============================================================================

/// Keys-unique mapping from edge to its ordered successor list, plus the
/// ordered start list. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TransitionGraph {
    start: Vec<Edge>,
    successors: HashMap<Edge, Vec<Edge>>,
}

impl TransitionGraph {
    /// Apply `rules` in order, last write wins per key.
    ///
    /// Every label referenced anywhere in the table must exist in `points`;
    /// the check runs over all entries, including ones a later entry
    /// overwrites, and fails before any graph is returned.
    pub fn build<'a, I>(points: &PointSet, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a RuleEntry>,
    {
        let mut graph = Self::default();
        let mut declared = 0usize;

        for entry in rules {
            validate_entry(points, entry)?;
            declared += 1;

            match &entry.key {
                RuleKey::Start => {
                    if !graph.start.is_empty() {
                        debug!(entries = entry.successors.len(), "start list redefined");
                    }
                    graph.start = entry.successors.clone();
                }
                RuleKey::Edge(edge) => {
                    let previous = graph.successors.insert(edge.clone(), entry.successors.clone());
                    if let Some(previous) = previous {
                        debug!(
                            key = %edge,
                            replaced = previous.len(),
                            with = entry.successors.len(),
                            "rule redefined, later declaration wins"
                        );
                    }
                }
            }
        }

        debug!(
            declared,
            keys = graph.successors.len(),
            start_edges = graph.start.len(),
            "transition graph built"
        );
        Ok(graph)
    }

    /// Successors of `edge` in declared order. Empty if the edge has no rule.
    pub fn lookup(&self, edge: &Edge) -> &[Edge] {
        self.successors.get(edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges a path may begin with, in declared order.
    pub fn start_edges(&self) -> &[Edge] {
        &self.start
    }

    /// True if the table holds a rule for `edge`.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.successors.contains_key(edge)
    }

    /// Number of distinct edge keys (the start entry is not counted).
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

fn validate_entry(points: &PointSet, entry: &RuleEntry) -> Result<()> {
    let key_edge = match &entry.key {
        RuleKey::Start => None,
        RuleKey::Edge(edge) => Some(edge),
    };
    for edge in key_edge.into_iter().chain(entry.successors.iter()) {
        check_label(points, &edge.from, edge)?;
        check_label(points, &edge.to, edge)?;
    }
    Ok(())
}

fn check_label(points: &PointSet, label: &PointLabel, edge: &Edge) -> Result<()> {
    if points.contains(label) {
        Ok(())
    } else {
        Err(Error::UnknownPoint { label: label.clone(), edge: edge.clone() })
    }
}
