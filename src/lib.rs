//! # box-tracer — Rule-Constrained Leg Enumeration
//!
//! Enumerates every sequence of box edges ("legs") allowed by a hand-authored
//! adjacency table, then samples unordered groups of those sequences for a
//! second, rotated layout.
//!
//! ## Design Principles
//!
//! 1. **Ordered input, keyed result**: the rule table is a list, so repeated
//!    keys are visible and resolved last-write-wins in one place
//! 2. **Deterministic enumeration**: path order depends only on declared
//!    list order, never on hashing or sorting
//! 3. **Injected randomness**: sampling takes any `rand::Rng`, so a seed
//!    reproduces a run exactly
//! 4. **Renderer at the edge**: drawing happens after computation finishes
//!    and cannot influence it
//!
//! ## Quick Start
//!
//! ```rust
//! use box_tracer::{Fixture, Tracer, TracerConfig};
//!
//! # fn example() -> box_tracer::Result<()> {
//! let config = TracerConfig::default().with_seed(42);
//! let tracer = Tracer::new(Fixture::box_legs(), config)?;
//! let output = tracer.trace(&mut tracer.config().rng())?;
//!
//! assert_eq!(output.paths.len(), 198);
//! for combination in &output.combinations {
//!     println!("{:?}", combination.display_indices());
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod enumerate;
pub mod sample;
pub mod fixture;
pub mod config;
pub mod layout;
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Point, PointLabel, PointSet, Edge, Path, PathIndex, Combination,
};
pub use graph::{RuleEntry, RuleKey, TransitionGraph};
pub use enumerate::{PathEnumerator, MIN_PATH_LEN, DEFAULT_MAX_DEPTH};
pub use sample::{CombinationSampler, Combinations, combination_count};
pub use fixture::Fixture;
pub use config::TracerConfig;
pub use layout::{LayoutConfig, GridConfig, Placement};
pub use render::{Renderer, TextRenderer, PresentStats, present};

use rand::Rng;

// ============================================================================
// Top-level Tracer handle
// ============================================================================

/// The primary entry point. Validates a fixture and configuration up front,
/// then enumerates paths and samples groups on demand.
pub struct Tracer {
    points: PointSet,
    graph: TransitionGraph,
    enumerator: PathEnumerator,
    sampler: CombinationSampler,
    config: TracerConfig,
}

impl Tracer {
    /// Fails fast on any configuration problem: unknown point labels,
    /// a depth bound below `MIN_PATH_LEN`, an empty group size.
    pub fn new(fixture: Fixture, config: TracerConfig) -> Result<Self> {
        config.validate()?;
        let points = fixture.point_set()?;
        let graph = TransitionGraph::build(&points, &fixture.rules)?;
        let enumerator = PathEnumerator::new(config.max_depth)?;
        let sampler = CombinationSampler::new(config.group_size, config.sample_size)?;
        Ok(Self { points, graph, enumerator, sampler, config })
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Every valid path, in enumeration order.
    pub fn paths(&self) -> Vec<Path> {
        self.enumerator.enumerate(&self.graph)
    }

    /// Enumerate, then sample groups of path indices with `rng`.
    pub fn trace<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TraceOutput> {
        let paths = self.paths();
        let total_combinations = self.sampler.total(paths.len())?;
        let combinations = self.sampler.sample(paths.len(), rng)?;
        Ok(TraceOutput { paths, combinations, total_combinations })
    }

    /// Hand a finished trace to `renderer` using the configured layout.
    pub fn present<R: Renderer + ?Sized>(&self, renderer: &mut R, output: &TraceOutput) -> Result<PresentStats> {
        render::present(renderer, &self.points, output, &self.config.layout)
    }
}

/// Finished, immutable results of one run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceOutput {
    /// All paths; position is the `PathIndex`.
    pub paths: Vec<Path>,
    /// Sampled groups, in draw order.
    pub combinations: Vec<Combination>,
    /// Size of the full group set the sample was drawn from.
    pub total_combinations: usize,
}

impl TraceOutput {
    pub fn path(&self, index: PathIndex) -> Option<&Path> {
        self.paths.get(index.0)
    }

    /// Paths paired with their indices.
    pub fn indexed_paths(&self) -> impl Iterator<Item = (PathIndex, &Path)> {
        self.paths.iter().enumerate().map(|(i, path)| (PathIndex(i), path))
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Nothing here is retryable: every operation is a pure function of its input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown point '{label}' referenced by edge {edge}")]
    UnknownPoint { label: PointLabel, edge: Edge },

    #[error("Depth bound {max_depth} is below the minimum path length {min}")]
    DepthBound { max_depth: usize, min: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Bad fixture or configuration, detected before any enumeration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownPoint { .. } | Error::DepthBound { .. } | Error::Configuration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
