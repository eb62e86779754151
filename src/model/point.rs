//! Point — a labeled corner of the box.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Opaque point label (e.g. `"p0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointLabel(pub String);

impl PointLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PointLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for PointLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A labeled 3D coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: PointLabel,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(label: impl Into<PointLabel>, x: f64, y: f64, z: f64) -> Self {
        Self { label: label.into(), x, y, z }
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Keys-unique set of points, addressed by label.
///
/// Declaration order is kept alongside the index so iteration is stable.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    order: Vec<PointLabel>,
    by_label: HashMap<PointLabel, Point>,
}

impl PointSet {
    /// Build a point set. Unlike rule entries, points may not be redefined.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let mut set = Self::default();
        for point in points {
            if set.by_label.contains_key(&point.label) {
                return Err(Error::Configuration(format!(
                    "point '{}' is defined more than once",
                    point.label
                )));
            }
            set.order.push(point.label.clone());
            set.by_label.insert(point.label.clone(), point);
        }
        Ok(set)
    }

    pub fn get(&self, label: &PointLabel) -> Option<&Point> {
        self.by_label.get(label)
    }

    pub fn contains(&self, label: &PointLabel) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Points in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.order.iter().filter_map(|label| self.by_label.get(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_keeps_declaration_order() {
        let set = PointSet::new(vec![
            Point::new("b", 1.0, 0.0, 0.0),
            Point::new("a", 0.0, 0.0, 0.0),
        ])
        .unwrap();
        let labels: Vec<&str> = set.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(set.get(&"a".into()).unwrap().coords(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_duplicate_point_rejected() {
        let err = PointSet::new(vec![
            Point::new("p0", 0.0, 0.0, 0.0),
            Point::new("p0", 1.0, 1.0, 1.0),
        ])
        .unwrap_err();
        assert!(err.is_configuration());
    }
}
