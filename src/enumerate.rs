//! Bounded-depth path enumeration over a `TransitionGraph`.
//!
//! Depth-first, pre-order: every continuation of a partial path (earlier
//! successors first) is exhausted before the next start edge is tried.
//! Enumeration order is a pure function of the start list order and each
//! successor list order; nothing is sorted or hashed along the way.
//!
//! Termination rule, with `d` the number of edges in the partial path:
//!
//! | `d`                        | successors | outcome                  |
//! |----------------------------|------------|--------------------------|
//! | `d < MIN_PATH_LEN`         | none       | dropped                  |
//! | `d < MIN_PATH_LEN`         | some       | extend                   |
//! | `MIN_PATH_LEN <= d < max`  | none       | emit                     |
//! | `MIN_PATH_LEN <= d < max`  | some       | extend                   |
//! | `d == max`                 | any        | emit                     |

use tracing::{info, trace};

use crate::graph::TransitionGraph;
use crate::model::{Edge, EdgeSeq, Path};
use crate::{Error, Result};

/// Shortest path that may be emitted.
pub const MIN_PATH_LEN: usize = 4;

/// Depth cap matching the box's edge topology.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Enumerates every valid path up to a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEnumerator {
    max_depth: usize,
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl PathEnumerator {
    /// Fails with `Error::DepthBound` if `max_depth < MIN_PATH_LEN`.
    pub fn new(max_depth: usize) -> Result<Self> {
        if max_depth < MIN_PATH_LEN {
            return Err(Error::DepthBound { max_depth, min: MIN_PATH_LEN });
        }
        Ok(Self { max_depth })
    }

    /// All paths through `graph`, in pre-order.
    ///
    /// An empty start list yields an empty vector.
    pub fn enumerate(&self, graph: &TransitionGraph) -> Vec<Path> {
        let mut out = Vec::new();
        let mut stack = EdgeSeq::new();

        for start in graph.start_edges() {
            stack.push(start.clone());
            self.extend(graph, &mut stack, &mut out);
            stack.pop();
        }

        info!(
            paths = out.len(),
            start_edges = graph.start_edges().len(),
            max_depth = self.max_depth,
            "paths enumerated"
        );
        out
    }

    fn extend(&self, graph: &TransitionGraph, stack: &mut EdgeSeq, out: &mut Vec<Path>) {
        let depth = stack.len();
        if depth >= self.max_depth {
            self.emit(stack, out);
            return;
        }

        let successors = match stack.last() {
            Some(current) => graph.lookup(current),
            None => return,
        };

        if successors.is_empty() {
            if depth >= MIN_PATH_LEN {
                self.emit(stack, out);
            }
            return;
        }

        for next in successors {
            stack.push(next.clone());
            self.extend(graph, stack, out);
            stack.pop();
        }
    }

    fn emit(&self, stack: &EdgeSeq, out: &mut Vec<Path>) {
        let path = Path::new(stack.iter().cloned());
        trace!(index = out.len(), %path, "path");
        out.push(path);
    }
}

/// Enumerate with the default depth bound.
pub fn enumerate(graph: &TransitionGraph) -> Vec<Path> {
    PathEnumerator::default().enumerate(graph)
}

/// True if `path` could have been produced from `graph`: it begins with a
/// start edge and every edge is listed as a successor of the one before it.
pub fn follows_rules(graph: &TransitionGraph, path: &Path) -> bool {
    let edges: &[Edge] = path.edges();
    let Some(first) = edges.first() else {
        return false;
    };
    graph.start_edges().contains(first)
        && edges.windows(2).all(|pair| graph.lookup(&pair[0]).contains(&pair[1]))
}
