//! Renderer boundary — hand finished results to a drawing host.
//!
//! The core computes paths and sampled groups first; only then does
//! `present()` walk them and call into the `Renderer`. Nothing the renderer
//! does (or how long it takes) feeds back into what was computed.
//!
//! `TextRenderer` writes a plain-text scene listing, useful for diffing
//! runs and for hosts that consume line-oriented input.

use std::io::Write;

use tracing::info;

use crate::layout::{LayoutConfig, Placement};
use crate::model::{Path, Point, PointLabel, PointSet};
use crate::{Error, Result, TraceOutput};

// ============================================================================
// Renderer trait
// ============================================================================

/// Drawing host contract.
pub trait Renderer {
    /// Draw one path at `placement`. `points` resolves the edge labels.
    fn draw_path(&mut self, points: &PointSet, path: &Path, placement: &Placement) -> Result<()>;

    /// Flush whatever has been drawn so far to the screen.
    fn redraw(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after both sections are drawn.
    fn finish(&mut self) -> Result<()> {
        self.redraw()
    }
}

/// What `present()` handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentStats {
    pub paths_drawn: usize,
    pub combinations_drawn: usize,
    pub redraws: usize,
}

/// Draw section one (paths in a grid) then section two (sampled groups,
/// each member turned by an even share of a full turn).
///
/// Items beyond a grid's capacity are skipped.
pub fn present<R: Renderer + ?Sized>(
    renderer: &mut R,
    points: &PointSet,
    output: &TraceOutput,
    layout: &LayoutConfig,
) -> Result<PresentStats> {
    layout.validate()?;
    for label in [&layout.rotation_center, &layout.label_anchor] {
        if !points.contains(label) {
            return Err(Error::Configuration(format!("layout references unknown point '{label}'")));
        }
    }

    let mut stats = PresentStats::default();

    for (index, path) in output.indexed_paths() {
        let Some(placement) = layout.path_placement(index) else {
            break;
        };
        renderer.draw_path(points, path, &placement)?;
        stats.paths_drawn += 1;
        if layout.should_redraw_path(index.0) {
            renderer.redraw()?;
            stats.redraws += 1;
        }
    }
    info!(
        generated = output.paths.len(),
        displayed = stats.paths_drawn,
        grid = layout.path_grid.size,
        "section one drawn"
    );

    for (slot, combination) in output.combinations.iter().enumerate() {
        let Some(placements) = layout.combination_placements(slot, combination) else {
            break;
        };
        for (index, placement) in combination.members().iter().zip(&placements) {
            let path = output.path(*index).ok_or_else(|| {
                Error::Render(format!("combination {combination} references missing path {index}"))
            })?;
            renderer.draw_path(points, path, placement)?;
        }
        stats.combinations_drawn += 1;
        if layout.should_redraw_combination(slot) {
            renderer.redraw()?;
            stats.redraws += 1;
        }
    }
    info!(
        total = output.total_combinations,
        displayed = stats.combinations_drawn,
        grid = layout.combination_grid.size,
        "section two drawn"
    );

    renderer.finish()?;
    Ok(stats)
}

// ============================================================================
// TextRenderer
// ============================================================================

/// Writes each drawn path as transformed line segments plus its label.
pub struct TextRenderer<W: Write> {
    writer: W,
    layout: LayoutConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W, layout: LayoutConfig) -> Self {
        Self { writer, layout }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_path(&mut self, points: &PointSet, path: &Path, placement: &Placement) -> Result<()> {
        let center = resolve(points, &self.layout.rotation_center)?;

        writeln!(
            self.writer,
            "path {} offset ({:.2}, {:.2}) rotation {}",
            placement.label, placement.offset_x, placement.offset_y, placement.rotation_degrees
        )?;
        for edge in path.edges() {
            let [x0, y0, z0] = placement.transform(resolve(points, &edge.from)?, center);
            let [x1, y1, z1] = placement.transform(resolve(points, &edge.to)?, center);
            writeln!(
                self.writer,
                "  line {}->{} ({x0:.2}, {y0:.2}, {z0:.2}) ({x1:.2}, {y1:.2}, {z1:.2})",
                edge.from, edge.to
            )?;
        }
        let [x, y, z] = placement.transform(resolve(points, &self.layout.label_anchor)?, center);
        writeln!(
            self.writer,
            "  text \"{}\" ({x:.2}, {y:.2}, {z:.2}) height {}",
            placement.label, self.layout.label_height
        )?;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        writeln!(self.writer, "redraw")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn resolve<'p>(points: &'p PointSet, label: &PointLabel) -> Result<&'p Point> {
    points
        .get(label)
        .ok_or_else(|| Error::Render(format!("unknown point '{label}'")))
}
