//! Grid placement for the two drawing sections.
//!
//! ```text
//!  section 1: one path per cell            section 2: one group per cell
//!  ┌────┬────┬─ ─ ┬────┐   gap   ┌──────┬──────┬─ ─ ┬──────┐
//!  │  1 │  2 │     │ 20 │ ──────► │ 0°   │      │     │      │
//!  ├────┼────┼─ ─ ┼────┤         │ 120° │ ...  │     │      │
//!  │ 21 │ ...│     │    │         │ 240° │      │     │      │
//! ```
//!
//! The core only decides where each item goes and how far it is turned.
//! Turning and offsetting actual coordinates is done by the renderer;
//! `Placement::transform` is provided for renderers that want the same
//! rotate-about-a-corner convention the layout assumes.

use serde::{Deserialize, Serialize};

use crate::model::{Combination, PathIndex, Point, PointLabel};
use crate::{Error, Result};

/// A rectangular grid filled row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells per row; the grid holds `size * size` items.
    pub size: usize,
    pub spacing_x: f64,
    pub spacing_y: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: 20, spacing_x: 600.0, spacing_y: 1000.0 }
    }
}

impl GridConfig {
    pub fn capacity(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// Offset of cell `slot`, or `None` once the grid is full.
    pub fn cell(&self, slot: usize) -> Option<(f64, f64)> {
        if slot >= self.capacity() {
            return None;
        }
        let row = slot / self.size;
        let col = slot % self.size;
        Some((col as f64 * self.spacing_x, row as f64 * self.spacing_y))
    }

    /// Horizontal extent of a full row.
    pub fn width(&self) -> f64 {
        self.size as f64 * self.spacing_x
    }
}

/// Both grids plus labeling and redraw cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub path_grid: GridConfig,
    pub combination_grid: GridConfig,
    /// Horizontal gap between the end of the path grid and the group grid.
    pub section_gap: f64,
    /// Corner every path is rotated about.
    pub rotation_center: PointLabel,
    /// Corner the index label is placed at.
    pub label_anchor: PointLabel,
    pub label_height: f64,
    /// Redraw after every n-th path (counted from the first) in section one.
    pub path_redraw_every: usize,
    /// Redraw after every n-th group in section two.
    pub combination_redraw_every: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            path_grid: GridConfig::default(),
            combination_grid: GridConfig { size: 10, spacing_x: 1400.0, spacing_y: 1400.0 },
            section_gap: 2000.0,
            rotation_center: PointLabel::new("p0"),
            label_anchor: PointLabel::new("p2"),
            label_height: 100.0,
            path_redraw_every: 5,
            combination_redraw_every: 1,
        }
    }
}

/// Where one path is drawn, how far it is turned, and what it is labeled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_degrees: f64,
    /// 1-based display index.
    pub label: usize,
}

impl Placement {
    /// Rotate `point` about `center` in the XY plane, then offset. Z is kept.
    pub fn transform(&self, point: &Point, center: &Point) -> [f64; 3] {
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let (x, y) = if self.rotation_degrees == 0.0 {
            (dx, dy)
        } else {
            let (sin, cos) = self.rotation_degrees.to_radians().sin_cos();
            (dx * cos - dy * sin, dx * sin + dy * cos)
        };
        [x + center.x + self.offset_x, y + center.y + self.offset_y, point.z]
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path_grid.size == 0 || self.combination_grid.size == 0 {
            return Err(Error::Configuration("grid size must be at least 1".into()));
        }
        if self.path_redraw_every == 0 || self.combination_redraw_every == 0 {
            return Err(Error::Configuration("redraw interval must be at least 1".into()));
        }
        Ok(())
    }

    /// X offset where the group grid begins.
    pub fn combination_origin_x(&self) -> f64 {
        self.path_grid.width() + self.section_gap
    }

    /// Placement of the path at `index` in section one, if it fits.
    pub fn path_placement(&self, index: PathIndex) -> Option<Placement> {
        let (offset_x, offset_y) = self.path_grid.cell(index.0)?;
        Some(Placement { offset_x, offset_y, rotation_degrees: 0.0, label: index.display() })
    }

    /// Placements of every member of the `slot`-th sampled group.
    ///
    /// Members share one cell and are spread evenly around the full turn:
    /// 0°, 120°, 240° for triples.
    pub fn combination_placements(&self, slot: usize, combination: &Combination) -> Option<Vec<Placement>> {
        let (cell_x, cell_y) = self.combination_grid.cell(slot)?;
        let offset_x = self.combination_origin_x() + cell_x;
        let step = 360.0 / combination.len().max(1) as f64;
        Some(
            combination
                .members()
                .iter()
                .enumerate()
                .map(|(i, index)| Placement {
                    offset_x,
                    offset_y: cell_y,
                    rotation_degrees: step * i as f64,
                    label: index.display(),
                })
                .collect(),
        )
    }

    pub fn should_redraw_path(&self, slot: usize) -> bool {
        slot % self.path_redraw_every == 0
    }

    pub fn should_redraw_combination(&self, slot: usize) -> bool {
        (slot + 1) % self.combination_redraw_every == 0
    }
}
