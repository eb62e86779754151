//! Path — an ordered chain of edges walked from a start edge.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::{Edge, PointLabel};

/// Inline capacity covers every path the default depth bound produces.
pub type EdgeSeq = SmallVec<[Edge; 5]>;

/// Position of a path in enumeration order (0-based).
///
/// Stable for a given transition table; labels and combinations refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathIndex(pub usize);

impl PathIndex {
    /// 1-based index used for labels.
    pub fn display(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for PathIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A path through the transition graph: start edge -> successor -> ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    edges: EdgeSeq,
}

impl Path {
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self { edges: edges.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn first(&self) -> Option<&Edge> {
        self.edges.first()
    }

    pub fn last(&self) -> Option<&Edge> {
        self.edges.last()
    }

    /// Corners visited, in order. A chained path of n edges visits n + 1.
    pub fn labels(&self) -> Vec<&PointLabel> {
        let mut labels: Vec<&PointLabel> = Vec::with_capacity(self.edges.len() + 1);
        for edge in &self.edges {
            if labels.last() != Some(&&edge.from) {
                labels.push(&edge.from);
            }
            labels.push(&edge.to);
        }
        labels
    }

    /// True if every edge starts where the previous one ended.
    pub fn is_chained(&self) -> bool {
        self.edges.windows(2).all(|pair| pair[0].chains_into(&pair[1]))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for edge in &self.edges {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{edge}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        Path::new([
            Edge::new("p0", "p4"),
            Edge::new("p4", "p5"),
            Edge::new("p5", "p7"),
            Edge::new("p7", "p6"),
        ])
    }

    #[test]
    fn test_labels_follow_chain() {
        let path = sample_path();
        let labels: Vec<&str> = path.labels().into_iter().map(PointLabel::as_str).collect();
        assert_eq!(labels, vec!["p0", "p4", "p5", "p7", "p6"]);
        assert!(path.is_chained());
    }

    #[test]
    fn test_unchained_path_detected() {
        let path = Path::new([Edge::new("p0", "p4"), Edge::new("p5", "p6")]);
        assert!(!path.is_chained());
    }

    #[test]
    fn test_display_index_is_one_based() {
        assert_eq!(PathIndex(0).display(), 1);
        assert_eq!(PathIndex(197).to_string(), "198");
    }

    #[test]
    fn test_display() {
        let path = Path::new([Edge::new("p0", "p4"), Edge::new("p4", "p5")]);
        assert_eq!(path.to_string(), "(p0, p4) (p4, p5)");
    }
}
