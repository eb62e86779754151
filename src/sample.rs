//! Combination generation and uniform sampling without replacement.
//!
//! The full set of unordered groups over `[0, n)` is ordered
//! lexicographically, so every group has a rank in `[0, C(n, k))`. Sampling
//! draws distinct ranks and unranks each one, which gives the same
//! distribution as sampling the materialized set without ever building it.

use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::model::{Combination, PathIndex};
use crate::{Error, Result};

/// Group size used for the triple layout.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// How many groups the second layout shows.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

// ============================================================================
// Counting
// ============================================================================

/// `C(n, k)`, or `None` if it does not fit in `usize`.
pub fn combination_count(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    usize::try_from(acc).ok()
}

// ============================================================================
// Full set
// ============================================================================

/// Every group of `k` distinct indices from `[0, n)`, ascending within each
/// group and lexicographic across groups.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<SmallVec<[usize; 3]>>,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let current = if k <= n { Some((0..k).collect()) } else { None };
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.current.as_mut()?;
        let item = Combination::from_ascending(current.iter().copied().map(PathIndex).collect());

        // Advance: rightmost slot that can still move right.
        let k = current.len();
        let mut slot = k;
        while slot > 0 && current[slot - 1] == self.n - k + slot - 1 {
            slot -= 1;
        }
        if slot == 0 {
            self.current = None;
        } else {
            current[slot - 1] += 1;
            for j in slot..k {
                current[j] = current[j - 1] + 1;
            }
        }
        Some(item)
    }
}

/// Lexicographic unranking: the `rank`-th group of `k` from `[0, n)`.
fn unrank(mut rank: usize, n: usize, k: usize) -> Result<Combination> {
    let mut members: SmallVec<[PathIndex; 3]> = SmallVec::with_capacity(k);
    let mut x = 0usize;
    for slot in 0..k {
        let remaining = k - slot - 1;
        loop {
            // groups whose next member is x
            let block = combination_count(n - x - 1, remaining).ok_or_else(overflow)?;
            if rank < block {
                break;
            }
            rank -= block;
            x += 1;
        }
        members.push(PathIndex(x));
        x += 1;
    }
    Ok(Combination::from_ascending(members))
}

fn overflow() -> Error {
    Error::Configuration("combination space does not fit in usize".into())
}

// ============================================================================
// CombinationSampler
// ============================================================================

/// Draws a uniform sample of groups without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationSampler {
    group_size: usize,
    sample_size: usize,
}

impl Default for CombinationSampler {
    fn default() -> Self {
        Self { group_size: DEFAULT_GROUP_SIZE, sample_size: DEFAULT_SAMPLE_SIZE }
    }
}

impl CombinationSampler {
    /// `group_size` must be at least 1.
    pub fn new(group_size: usize, sample_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(Error::Configuration("group size must be at least 1".into()));
        }
        Ok(Self { group_size, sample_size })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Size of the full set for `item_count` items.
    pub fn total(&self, item_count: usize) -> Result<usize> {
        combination_count(item_count, self.group_size).ok_or_else(overflow)
    }

    /// Draw `min(sample_size, C(item_count, group_size))` distinct groups.
    ///
    /// Asking for more than exist returns all of them (in random order),
    /// not an error. Fewer items than the group size returns nothing.
    /// Output is in draw order.
    pub fn sample<R: Rng + ?Sized>(&self, item_count: usize, rng: &mut R) -> Result<Vec<Combination>> {
        let total = self.total(item_count)?;
        let amount = self.sample_size.min(total);
        if amount < self.sample_size {
            debug!(requested = self.sample_size, available = total, "sample size clamped");
        }

        let ranks = rand::seq::index::sample(rng, total, amount);
        let sampled = ranks
            .into_iter()
            .map(|rank| unrank(rank, item_count, self.group_size))
            .collect::<Result<Vec<_>>>()?;

        info!(
            items = item_count,
            group_size = self.group_size,
            total,
            sampled = sampled.len(),
            "combinations sampled"
        );
        Ok(sampled)
    }
}

/// Sample triples with the given sample size.
pub fn sample_triples<R: Rng + ?Sized>(
    item_count: usize,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<Combination>> {
    CombinationSampler::new(DEFAULT_GROUP_SIZE, sample_size)?.sample(item_count, rng)
}
