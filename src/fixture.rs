//! Static input data: box corners and the leg adjacency rules.
//!
//! `Fixture::box_legs()` is the hand-authored table for the 174.76 x 442.72
//! x 360 box. It keeps the table's repeated keys exactly as written; only
//! the last declaration of each key reaches the graph.

use serde::{Deserialize, Serialize};

use crate::graph::{RuleEntry, TransitionGraph};
use crate::model::{Edge, Point, PointSet};
use crate::Result;

/// Points plus the ordered rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub points: Vec<Point>,
    pub rules: Vec<RuleEntry>,
}

impl Fixture {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn point_set(&self) -> Result<PointSet> {
        PointSet::new(self.points.iter().cloned())
    }

    /// Validate labels and build the transition graph.
    pub fn graph(&self) -> Result<TransitionGraph> {
        TransitionGraph::build(&self.point_set()?, &self.rules)
    }

    /// The box leg fixture.
    pub fn box_legs() -> Self {
        Self { points: box_points(), rules: box_rules() }
    }
}

const WIDTH: f64 = 174.76;
const DEPTH: f64 = 442.72;
const HEIGHT: f64 = 360.0;

fn box_points() -> Vec<Point> {
    vec![
        Point::new("p0", 0.0, 0.0, 0.0),
        Point::new("p1", WIDTH, 0.0, 0.0),
        Point::new("p2", WIDTH, DEPTH, 0.0),
        Point::new("p3", 0.0, DEPTH, 0.0),
        Point::new("p4", 0.0, 0.0, HEIGHT),
        Point::new("p5", WIDTH, 0.0, HEIGHT),
        Point::new("p6", WIDTH, DEPTH, HEIGHT),
        Point::new("p7", 0.0, DEPTH, HEIGHT),
    ]
}

fn e(from: &str, to: &str) -> Edge {
    Edge::new(from, to)
}

fn rule(from: &str, to: &str, next: &[(&str, &str)]) -> RuleEntry {
    RuleEntry::edge(e(from, to), next.iter().map(|&(a, b)| e(a, b)))
}

fn box_rules() -> Vec<RuleEntry> {
    vec![
        RuleEntry::start([e("p0", "p4"), e("p0", "p5"), e("p1", "p5"), e("p1", "p4")]),
        rule("p0", "p4", &[("p4", "p5"), ("p4", "p7"), ("p4", "p6"), ("p4", "p3")]),
        rule("p0", "p5", &[("p5", "p4"), ("p5", "p7"), ("p5", "p6"), ("p5", "p2")]),
        rule("p1", "p4", &[("p4", "p5"), ("p4", "p7"), ("p4", "p6"), ("p4", "p3")]),
        rule("p1", "p5", &[("p5", "p4"), ("p5", "p7"), ("p5", "p6"), ("p5", "p2")]),
        rule("p4", "p5", &[("p5", "p7"), ("p5", "p2"), ("p5", "p6")]),
        rule("p4", "p7", &[("p7", "p6"), ("p7", "p3"), ("p7", "p2")]),
        rule("p4", "p6", &[("p6", "p7"), ("p6", "p2"), ("p6", "p3")]),
        rule("p4", "p3", &[("p3", "p7"), ("p3", "p6"), ("p3", "p2")]),
        rule("p5", "p4", &[("p4", "p7"), ("p4", "p6"), ("p4", "p3")]),
        rule("p5", "p7", &[("p7", "p3"), ("p7", "p6"), ("p7", "p2")]),
        rule("p5", "p6", &[("p6", "p7"), ("p6", "p2"), ("p6", "p3")]),
        rule("p5", "p2", &[("p2", "p6"), ("p2", "p7"), ("p2", "p3")]),
        rule("p5", "p7", &[("p7", "p6"), ("p7", "p3"), ("p7", "p2")]),
        rule("p5", "p2", &[("p2", "p6"), ("p2", "p3"), ("p2", "p7")]),
        rule("p5", "p6", &[("p6", "p2"), ("p6", "p7"), ("p6", "p3")]),
        rule("p7", "p6", &[("p6", "p2"), ("p6", "p3")]),
        rule("p7", "p3", &[("p3", "p2"), ("p3", "p6")]),
        rule("p7", "p2", &[("p2", "p6"), ("p2", "p3")]),
        rule("p6", "p7", &[("p7", "p3"), ("p7", "p2")]),
        rule("p6", "p2", &[("p2", "p3")]),
        rule("p6", "p3", &[("p3", "p2"), ("p3", "p7")]),
        rule("p4", "p7", &[("p7", "p6"), ("p7", "p3"), ("p7", "p2")]),
        rule("p4", "p6", &[("p6", "p2"), ("p6", "p3"), ("p6", "p7")]),
        rule("p4", "p3", &[("p3", "p7"), ("p3", "p6"), ("p3", "p2")]),
        rule("p2", "p6", &[("p6", "p7"), ("p6", "p3")]),
        rule("p2", "p3", &[("p3", "p7"), ("p3", "p6")]),
        rule("p2", "p7", &[("p7", "p3")]),
        rule("p7", "p6", &[("p6", "p3"), ("p6", "p2")]),
        rule("p7", "p3", &[("p3", "p6"), ("p3", "p2")]),
        rule("p7", "p2", &[("p2", "p3"), ("p2", "p6")]),
        rule("p2", "p6", &[("p6", "p7"), ("p6", "p3")]),
        rule("p2", "p3", &[("p3", "p7"), ("p3", "p6")]),
        rule("p2", "p7", &[("p7", "p3"), ("p7", "p6")]),
        rule("p3", "p2", &[("p2", "p6"), ("p2", "p7")]),
        rule("p3", "p6", &[("p6", "p2"), ("p6", "p7")]),
        rule("p6", "p3", &[("p3", "p2"), ("p3", "p7")]),
        rule("p3", "p7", &[("p7", "p6"), ("p7", "p2")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RuleKey;

    #[test]
    fn test_box_fixture_shape() {
        let fixture = Fixture::box_legs();
        assert_eq!(fixture.points.len(), 8);
        assert_eq!(fixture.rules.len(), 38);
        let graph = fixture.graph().unwrap();
        // 37 edge entries, 13 of them redefinitions
        assert_eq!(graph.len(), 24);
        assert_eq!(graph.start_edges().len(), 4);
    }

    #[test]
    fn test_box_fixture_redefinitions_resolved() {
        let graph = Fixture::box_legs().graph().unwrap();
        assert_eq!(graph.lookup(&e("p5", "p7")), &[e("p7", "p6"), e("p7", "p3"), e("p7", "p2")]);
        assert_eq!(graph.lookup(&e("p7", "p6")), &[e("p6", "p3"), e("p6", "p2")]);
        assert_eq!(graph.lookup(&e("p2", "p7")), &[e("p7", "p3"), e("p7", "p6")]);
        assert_eq!(graph.lookup(&e("p6", "p3")), &[e("p3", "p2"), e("p3", "p7")]);
    }

    #[test]
    fn test_fixture_json_roundtrip_keeps_duplicates() {
        let fixture = Fixture::box_legs();
        let json = serde_json::to_string(&fixture).unwrap();
        let back = Fixture::from_json_str(&json).unwrap();
        assert_eq!(back, fixture);
        let p5p7 = RuleKey::Edge(e("p5", "p7"));
        assert_eq!(back.rules.iter().filter(|r| r.key == p5p7).count(), 2);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Fixture::from_json_str("{\"points\": 3}"),
            Err(crate::Error::Json(_))
        ));
    }
}
