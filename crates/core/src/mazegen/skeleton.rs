//! Skeleton extraction and recursive maze nesting inside a tile buffer.

use crate::types::{Coord, MazeError, TileKind};

use super::carver::carve;
use super::expander::{TileBuffer, TileGeometry, expand_into};
use super::graph::GridGraph;
use super::sequence::LcgSequence;

/// What a nesting pass did to the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NestOutcome {
    /// Nodes reached by the nested carve. Zero means the sampled
    /// skeleton was empty and the buffer was left untouched.
    pub node_count: usize,
    pub edge_count: usize,
}

/// Samples `buffer` at `geometry`'s block origins and builds a sparse
/// connected graph out of the floor samples.
///
/// A sample position only exists while its whole block fits inside the
/// buffer. Wall samples produce no node, so regions walled off by a
/// coarser pass stay permanently excluded from finer ones.
pub fn extract_skeleton(buffer: &TileBuffer, geometry: &TileGeometry) -> GridGraph {
    let mut graph = GridGraph::empty();
    if geometry.cell_dim == 0 {
        return graph;
    }

    let mut x = 0_usize;
    while geometry.block_origin(x) + geometry.cell_dim <= buffer.width {
        let mut y = 0_usize;
        while geometry.block_origin(y) + geometry.cell_dim <= buffer.height {
            let sample = Coord {
                x: geometry.block_origin(x) as i32,
                y: geometry.block_origin(y) as i32,
            };
            if buffer.tile_at(sample) == TileKind::Floor {
                graph.insert_node(Coord { x: x as i32, y: y as i32 });
            }
            y += 1;
        }
        x += 1;
    }

    graph.connect_all();
    graph
}

/// Re-carves a finer maze constrained to the buffer's current floor
/// skeleton, overwriting the buffer in place.
///
/// The whole buffer is reset to wall before re-expansion, so callers
/// that need both scales must snapshot between passes. The carve roots
/// at the skeleton's lowest coordinate, which keeps repeated runs over
/// identical buffers deterministic.
pub fn nest(
    buffer: &mut TileBuffer,
    geometry: &TileGeometry,
    sequence: &mut LcgSequence,
) -> Result<NestOutcome, MazeError> {
    let skeleton = extract_skeleton(buffer, geometry);
    let Some(root) = skeleton.first_coord() else {
        return Ok(NestOutcome { node_count: 0, edge_count: 0 });
    };

    buffer.fill_walls();
    let maze = carve(&skeleton, root, sequence)?;
    expand_into(&maze, geometry, buffer)?;

    Ok(NestOutcome { node_count: maze.node_count(), edge_count: maze.edge_count() })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use super::super::expander::expand;
    use super::*;
    use crate::types::TileKind;

    fn floor_tiles_form_one_region(buffer: &TileBuffer) -> bool {
        let mut floors = Vec::new();
        for y in 0..buffer.height {
            for x in 0..buffer.width {
                let pos = Coord { x: x as i32, y: y as i32 };
                if buffer.tile_at(pos) == TileKind::Floor {
                    floors.push(pos);
                }
            }
        }
        let Some(start) = floors.first().copied() else {
            return true;
        };

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [
                Coord { x: pos.x, y: pos.y - 1 },
                Coord { x: pos.x, y: pos.y + 1 },
                Coord { x: pos.x + 1, y: pos.y },
                Coord { x: pos.x - 1, y: pos.y },
            ] {
                if buffer.tile_at(next) == TileKind::Floor && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len() == floors.len()
    }

    #[test]
    fn all_floor_region_samples_to_a_fully_connected_sparse_grid() {
        let mut buffer = TileBuffer::filled_with_walls(5, 5);
        buffer.tiles.fill(TileKind::Floor);

        let skeleton = extract_skeleton(&buffer, &TileGeometry::new(1, 1, 0));
        // Samples land at 0, 2, 4 on both axes.
        assert_eq!(skeleton.node_count(), 9);
        assert_eq!(skeleton.edge_count(), 12);
    }

    #[test]
    fn all_wall_region_samples_to_an_empty_graph() {
        let buffer = TileBuffer::filled_with_walls(6, 6);
        let skeleton = extract_skeleton(&buffer, &TileGeometry::new(1, 1, 0));
        assert_eq!(skeleton.node_count(), 0);
    }

    #[test]
    fn sample_positions_only_exist_while_the_whole_block_fits() {
        let mut buffer = TileBuffer::filled_with_walls(7, 7);
        buffer.tiles.fill(TileKind::Floor);
        // Blocks of 2 with a 1-tile gap: origins 0, 3, 6 — but 6 + 2 > 7.
        let skeleton = extract_skeleton(&buffer, &TileGeometry::new(2, 1, 0));
        assert_eq!(skeleton.dimensions(), (2, 2));
        assert_eq!(skeleton.node_count(), 4);
    }

    #[test]
    fn nesting_an_all_wall_buffer_reports_empty_and_leaves_it_alone() {
        let mut buffer = TileBuffer::filled_with_walls(9, 9);
        let before = buffer.clone();
        let outcome =
            nest(&mut buffer, &TileGeometry::new(1, 1, 0), &mut LcgSequence::new(3)).unwrap();
        assert_eq!(outcome, NestOutcome { node_count: 0, edge_count: 0 });
        assert_eq!(buffer, before);
    }

    #[test]
    fn nested_pass_over_an_expanded_maze_carves_a_finer_tree_in_place() {
        let connected = GridGraph::grid(3, 3, true);
        let mut sequence = LcgSequence::new(1_235_312_312);
        let maze = carve(&connected, Coord { x: 0, y: 0 }, &mut sequence).unwrap();
        let mut buffer = expand(&maze, &TileGeometry::new(3, 1, 1)).unwrap();
        assert_eq!((buffer.width, buffer.height), (13, 13));

        // Finer scale samples at odd coordinates, which all land inside
        // the coarse blocks, so the skeleton is a full 6x6 grid.
        let outcome = nest(&mut buffer, &TileGeometry::new(1, 1, 1), &mut sequence).unwrap();
        assert_eq!(outcome.node_count, 36);
        assert_eq!(outcome.edge_count, 35);
        assert!(floor_tiles_form_one_region(&buffer));
    }

    #[test]
    fn nesting_is_deterministic_for_identical_buffers_and_seeds() {
        let connected = GridGraph::grid(4, 4, true);
        let maze =
            carve(&connected, Coord { x: 0, y: 0 }, &mut LcgSequence::new(42)).unwrap();
        let template = expand(&maze, &TileGeometry::new(3, 3, 2)).unwrap();

        let mut left = template.clone();
        let mut right = template.clone();
        nest(&mut left, &TileGeometry::new(1, 1, 2), &mut LcgSequence::new(9)).unwrap();
        nest(&mut right, &TileGeometry::new(1, 1, 2), &mut LcgSequence::new(9)).unwrap();
        assert_eq!(left.canonical_bytes(), right.canonical_bytes());
    }

    #[test]
    fn walled_off_regions_never_gain_nodes_across_passes() {
        let mut buffer = TileBuffer::filled_with_walls(5, 5);
        // One floor cell; every other sample stays wall.
        buffer.tiles[0] = TileKind::Floor;
        let outcome =
            nest(&mut buffer, &TileGeometry::new(1, 1, 0), &mut LcgSequence::new(8)).unwrap();
        assert_eq!(outcome.node_count, 1);
        assert_eq!(outcome.edge_count, 0);
        assert_eq!(buffer.floor_count(), 1);
        assert_eq!(buffer.tile_at(Coord { x: 0, y: 0 }), TileKind::Floor);
    }
}
