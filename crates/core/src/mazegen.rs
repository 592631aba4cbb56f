//! Procedural maze generation domain split into coherent submodules.

pub mod glyphs;

mod carver;
mod expander;
mod graph;
mod sequence;
mod skeleton;

pub use carver::carve;
pub use expander::{TileBuffer, TileGeometry, expand, expand_into};
pub use glyphs::{GLYPH_A, overlay_glyph};
pub use graph::GridGraph;
pub use sequence::LcgSequence;
pub use skeleton::{NestOutcome, extract_skeleton, nest};

use crate::types::{Coord, MazeError};

/// Runs the full pipeline once: fully connected grid, depth-first carve
/// rooted at (0, 0), then tile expansion at `geometry`.
pub fn generate(
    size_x: usize,
    size_y: usize,
    seed: u64,
    geometry: &TileGeometry,
) -> Result<TileBuffer, MazeError> {
    let connected = GridGraph::grid(size_x, size_y, true);
    let mut sequence = LcgSequence::new(seed);
    let maze = carve(&connected, Coord { x: 0, y: 0 }, &mut sequence)?;
    expand(&maze, geometry)
}
