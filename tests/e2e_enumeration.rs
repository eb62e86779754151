//! End-to-end tests for graph construction and path enumeration.
//!
//! Each test exercises: fixture -> TransitionGraph::build -> PathEnumerator.

use box_tracer::enumerate::{enumerate, follows_rules};
use box_tracer::{
    Edge, Error, Fixture, Path, PathEnumerator, Point, PointSet, RuleEntry, TransitionGraph,
};
use pretty_assertions::assert_eq;

fn e(from: &str, to: &str) -> Edge {
    Edge::new(from, to)
}

// ============================================================================
// Helper: four start edges, binary branching, every branch ends at depth 4.
//
//   (o, s1..s4) -> (s, t1 | t2) -> (t, u1 | u2) -> (u, v1 | v2) -> (no rule)
// ============================================================================

fn layered_fixture() -> Fixture {
    let labels = ["o", "s1", "s2", "s3", "s4", "t1", "t2", "u1", "u2", "v1", "v2"];
    let points = labels.iter().map(|l| Point::new(*l, 0.0, 0.0, 0.0)).collect();

    let starts = ["s1", "s2", "s3", "s4"];
    let mut rules = vec![RuleEntry::start(starts.iter().map(|s| e("o", s)))];
    for s in starts {
        rules.push(RuleEntry::edge(e("o", s), [e(s, "t1"), e(s, "t2")]));
        for t in ["t1", "t2"] {
            rules.push(RuleEntry::edge(e(s, t), [e(t, "u1"), e(t, "u2")]));
        }
    }
    for t in ["t1", "t2"] {
        for u in ["u1", "u2"] {
            rules.push(RuleEntry::edge(e(t, u), [e(u, "v1"), e(u, "v2")]));
        }
    }
    Fixture { points, rules }
}

// ============================================================================
// 1. Minimal two-level table terminates at depth four
// ============================================================================

#[test]
fn test_layered_table_path_count() {
    let graph = layered_fixture().graph().unwrap();
    let paths = enumerate(&graph);

    // 4 starts x 2 x 2 x 2
    assert_eq!(paths.len(), 32);
    assert!(paths.iter().all(|p| p.len() == 4));
    assert_eq!(
        paths[0],
        Path::new([e("o", "s1"), e("s1", "t1"), e("t1", "u1"), e("u1", "v1")])
    );
    assert_eq!(
        paths[31],
        Path::new([e("o", "s4"), e("s4", "t2"), e("t2", "u2"), e("u2", "v2")])
    );
}

// ============================================================================
// 2. Empty start list yields no paths
// ============================================================================

#[test]
fn test_empty_start_list() {
    let mut fixture = layered_fixture();
    fixture.rules[0] = RuleEntry::start(Vec::new());
    let graph = fixture.graph().unwrap();
    assert!(graph.start_edges().is_empty());
    assert!(enumerate(&graph).is_empty());
}

#[test]
fn test_no_rules_at_all() {
    let points = PointSet::new(vec![Point::new("a", 0.0, 0.0, 0.0)]).unwrap();
    let graph = TransitionGraph::build(&points, &Vec::<RuleEntry>::new()).unwrap();
    assert!(enumerate(&graph).is_empty());
}

// ============================================================================
// 3. Box fixture: counts, order, invariants
// ============================================================================

#[test]
fn test_box_fixture_yields_198_paths() {
    let graph = Fixture::box_legs().graph().unwrap();
    let paths = enumerate(&graph);
    assert_eq!(paths.len(), 198);
    assert!(paths.iter().all(|p| p.len() == 5));
}

#[test]
fn test_box_fixture_order() {
    let graph = Fixture::box_legs().graph().unwrap();
    let paths = enumerate(&graph);

    assert_eq!(
        paths[0],
        Path::new([e("p0", "p4"), e("p4", "p5"), e("p5", "p7"), e("p7", "p6"), e("p6", "p3")])
    );
    assert_eq!(
        paths[1],
        Path::new([e("p0", "p4"), e("p4", "p5"), e("p5", "p7"), e("p7", "p6"), e("p6", "p2")])
    );
    // first path from the second start edge
    assert_eq!(
        paths[49],
        Path::new([e("p0", "p5"), e("p5", "p4"), e("p4", "p7"), e("p7", "p6"), e("p6", "p3")])
    );
    assert_eq!(
        paths[197],
        Path::new([e("p1", "p4"), e("p4", "p3"), e("p3", "p2"), e("p2", "p7"), e("p7", "p6")])
    );
}

#[test]
fn test_box_fixture_paths_per_start_edge() {
    let graph = Fixture::box_legs().graph().unwrap();
    let paths = enumerate(&graph);
    let count = |start: Edge| paths.iter().filter(|p| p.first() == Some(&start)).count();
    assert_eq!(count(e("p0", "p4")), 49);
    assert_eq!(count(e("p0", "p5")), 50);
    assert_eq!(count(e("p1", "p5")), 50);
    assert_eq!(count(e("p1", "p4")), 49);
}

#[test]
fn test_box_fixture_other_depths() {
    let graph = Fixture::box_legs().graph().unwrap();
    assert_eq!(PathEnumerator::new(4).unwrap().enumerate(&graph).len(), 104);
    let deeper = PathEnumerator::new(6).unwrap().enumerate(&graph);
    assert_eq!(deeper.len(), 380);
    assert!(deeper.iter().all(|p| (4..=6).contains(&p.len())));
}

#[test]
fn test_enumeration_is_deterministic() {
    let first = enumerate(&Fixture::box_legs().graph().unwrap());
    let second = enumerate(&Fixture::box_legs().graph().unwrap());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_every_path_follows_rules() {
    let graph = Fixture::box_legs().graph().unwrap();
    for path in enumerate(&graph) {
        assert!(follows_rules(&graph, &path), "path violates adjacency: {path}");
        assert!(path.is_chained(), "path is not a connected walk: {path}");
    }
}

// ============================================================================
// 4. Last write wins changes the result
// ============================================================================

#[test]
fn test_only_final_declaration_shapes_paths() {
    // Drop every rule after the first occurrence of each key: the earlier
    // successor orders then drive enumeration, and order changes.
    let fixture = Fixture::box_legs();
    let mut seen = std::collections::HashSet::new();
    let first_only: Vec<RuleEntry> = fixture
        .rules
        .iter()
        .filter(|r| seen.insert(r.key.clone()))
        .cloned()
        .collect();
    let first_graph = TransitionGraph::build(&fixture.point_set().unwrap(), &first_only).unwrap();
    let last_graph = fixture.graph().unwrap();

    assert_eq!(
        first_graph.lookup(&e("p5", "p7")),
        &[e("p7", "p3"), e("p7", "p6"), e("p7", "p2")]
    );
    assert_eq!(
        last_graph.lookup(&e("p5", "p7")),
        &[e("p7", "p6"), e("p7", "p3"), e("p7", "p2")]
    );
    assert_ne!(enumerate(&first_graph), enumerate(&last_graph));
}

// ============================================================================
// 5. Configuration errors fail before enumeration
// ============================================================================

#[test]
fn test_unknown_point_fails_build() {
    let mut fixture = Fixture::box_legs();
    fixture.rules.push(RuleEntry::edge(e("p3", "p8"), [e("p8", "p0")]));
    let err = fixture.graph().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("p8"), "unexpected message: {err}");
}

#[test]
fn test_depth_three_rejected() {
    assert!(matches!(PathEnumerator::new(3), Err(Error::DepthBound { .. })));
}
