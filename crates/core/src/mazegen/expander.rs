//! Expansion of an abstract maze graph into a concrete 2D tile buffer.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, MazeError, TileKind};

use super::graph::GridGraph;

/// Geometry of one expansion pass: every graph node becomes a
/// `cell_dim` square block of floor, every traversed edge a corridor
/// strip of length `corridor_dist`, and the whole buffer is wrapped in
/// a wall frame `frame` tiles thick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGeometry {
    pub cell_dim: usize,
    pub corridor_dist: usize,
    pub frame: usize,
}

impl TileGeometry {
    pub fn new(cell_dim: usize, corridor_dist: usize, frame: usize) -> Self {
        Self { cell_dim, corridor_dist, frame }
    }

    /// Tile span covered by `count` blocks along one axis, frame included.
    pub fn span(&self, count: usize) -> usize {
        self.cell_dim * count + count.saturating_sub(1) * self.corridor_dist + 2 * self.frame
    }

    /// Top-left tile coordinate of the block for grid index `index`.
    pub fn block_origin(&self, index: usize) -> usize {
        self.frame + index * (self.cell_dim + self.corridor_dist)
    }
}

/// Rectangular tile buffer, row-major, `tiles[y * width + x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBuffer {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl TileBuffer {
    pub fn filled_with_walls(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Wall; width * height] }
    }

    /// Out-of-bounds reads come back as `Wall`, so consumers can probe
    /// neighbors without their own bounds arithmetic.
    pub fn tile_at(&self, pos: Coord) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y * self.width + x]
    }

    /// Resets every tile to `Wall`, keeping the dimensions.
    pub fn fill_walls(&mut self) {
        self.tiles.fill(TileKind::Wall);
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == TileKind::Floor).count()
    }

    /// Stable byte encoding for fingerprinting and golden comparisons.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        bytes
    }
}

/// Allocates a buffer sized by the geometry formula for `graph`'s
/// dimensions and expands into it.
pub fn expand(graph: &GridGraph, geometry: &TileGeometry) -> Result<TileBuffer, MazeError> {
    let (size_x, size_y) = graph.dimensions();
    let mut buffer =
        TileBuffer::filled_with_walls(geometry.span(size_x), geometry.span(size_y));
    expand_into(graph, geometry, &mut buffer)?;
    Ok(buffer)
}

/// Writes `graph` into an existing buffer.
///
/// Each node's block is filled, then the corridors toward `(x+1, y)` and
/// `(x, y+1)`. Testing only these two directions per node covers every
/// bidirectional edge exactly once across the full iteration. Any write
/// that would leave the buffer fails loudly instead of clipping.
pub fn expand_into(
    graph: &GridGraph,
    geometry: &TileGeometry,
    buffer: &mut TileBuffer,
) -> Result<(), MazeError> {
    for coord in graph.coords() {
        if coord.x < 0 || coord.y < 0 {
            return Err(MazeError::NegativeCoordinate { coord });
        }
        let origin_x = geometry.block_origin(coord.x as usize);
        let origin_y = geometry.block_origin(coord.y as usize);

        fill_rect(buffer, origin_x, origin_y, geometry.cell_dim, geometry.cell_dim)?;

        let east = Coord { x: coord.x + 1, y: coord.y };
        if graph.has_edge(coord, east) {
            fill_rect(
                buffer,
                origin_x + geometry.cell_dim,
                origin_y,
                geometry.corridor_dist,
                geometry.cell_dim,
            )?;
        }

        let south = Coord { x: coord.x, y: coord.y + 1 };
        if graph.has_edge(coord, south) {
            fill_rect(
                buffer,
                origin_x,
                origin_y + geometry.cell_dim,
                geometry.cell_dim,
                geometry.corridor_dist,
            )?;
        }
    }
    Ok(())
}

fn fill_rect(
    buffer: &mut TileBuffer,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) -> Result<(), MazeError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    let right = left + width - 1;
    let bottom = top + height - 1;
    if right >= buffer.width || bottom >= buffer.height {
        return Err(MazeError::TileOutOfBounds {
            x: right,
            y: bottom,
            width: buffer.width,
            height: buffer.height,
        });
    }
    for y in top..=bottom {
        for x in left..=right {
            buffer.tiles[y * buffer.width + x] = TileKind::Floor;
        }
    }
    Ok(())
}
