//! # Box Leg Model
//!
//! Plain data types shared by the graph builder, the enumerator, the
//! sampler and any renderer: points, directed edges, paths, combinations.
//!
//! Design rule: this module is pure data. No I/O, no randomness, no logging.

pub mod point;
pub mod edge;
pub mod path;
pub mod combination;

pub use point::{Point, PointLabel, PointSet};
pub use edge::Edge;
pub use path::{EdgeSeq, Path, PathIndex};
pub use combination::Combination;
