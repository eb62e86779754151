//! Combination — an unordered group of distinct path indices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::PathIndex;

/// An unordered group of distinct path indices, stored ascending.
///
/// The canonical form is enforced on construction, so two combinations
/// holding the same indices always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination {
    members: SmallVec<[PathIndex; 3]>,
}

impl Combination {
    /// Canonicalize `indices`. Returns `None` if any index repeats.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut members: SmallVec<[PathIndex; 3]> = indices.into_iter().map(PathIndex).collect();
        members.sort_unstable();
        if members.windows(2).any(|pair| pair[0] == pair[1]) {
            return None;
        }
        Some(Self { members })
    }

    /// Build from indices already strictly ascending. Callers guarantee order.
    pub(crate) fn from_ascending(members: SmallVec<[PathIndex; 3]>) -> Self {
        debug_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));
        Self { members }
    }

    pub fn members(&self) -> &[PathIndex] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 1-based indices, for labels.
    pub fn display_indices(&self) -> Vec<usize> {
        self.members.iter().map(|idx| idx.display()).collect()
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: Vec<String> = self.members.iter().map(|idx| idx.to_string()).collect();
        write!(f, "{{{}}}", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let a = Combination::new([7, 2, 4]).unwrap();
        let b = Combination::new([4, 7, 2]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.members(), &[PathIndex(2), PathIndex(4), PathIndex(7)]);
    }

    #[test]
    fn test_repeated_index_rejected() {
        assert!(Combination::new([1, 1, 3]).is_none());
    }

    #[test]
    fn test_display_indices() {
        let combo = Combination::new([0, 5, 9]).unwrap();
        assert_eq!(combo.display_indices(), vec![1, 6, 10]);
        assert_eq!(combo.to_string(), "{1, 6, 10}");
    }
}
