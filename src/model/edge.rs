//! Edge — a directed leg between two box corners.

use serde::{Deserialize, Serialize};
use super::PointLabel;

/// A directed edge. `(p0, p4)` and `(p4, p0)` are distinct graph nodes.
///
/// Serializes as a two-element array: `["p0", "p4"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(PointLabel, PointLabel)", into = "(PointLabel, PointLabel)")]
pub struct Edge {
    pub from: PointLabel,
    pub to: PointLabel,
}

impl Edge {
    pub fn new(from: impl Into<PointLabel>, to: impl Into<PointLabel>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    /// True if `next` starts where this edge ends.
    pub fn chains_into(&self, next: &Edge) -> bool {
        self.to == next.from
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

impl From<(PointLabel, PointLabel)> for Edge {
    fn from((from, to): (PointLabel, PointLabel)) -> Self {
        Self { from, to }
    }
}

impl From<Edge> for (PointLabel, PointLabel) {
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}

impl From<(&str, &str)> for Edge {
    fn from((from, to): (&str, &str)) -> Self {
        Self::new(from, to)
    }
}
