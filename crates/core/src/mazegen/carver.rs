//! Randomized depth-first maze carving over a connected grid graph.

use std::collections::BTreeSet;

use crate::types::{Coord, MazeError};

use super::graph::{GridGraph, orthogonal_neighbors};
use super::sequence::LcgSequence;

/// Stack record: the node to explore plus the node it was reached from.
/// The root carries itself as `arrived_from`, meaning "no edge to add".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Visit {
    node: Coord,
    arrived_from: Coord,
}

/// Carves a spanning tree into a fresh graph over the same coordinate
/// space as `connected`.
///
/// The input graph only supplies topology; its edges are never mutated.
/// Nodes unreachable from `root` (disconnected input) are left entirely
/// absent from the output, not present as isolated nodes. Callers that
/// rely on every coordinate surviving must pre-validate connectivity.
pub fn carve(
    connected: &GridGraph,
    root: Coord,
    sequence: &mut LcgSequence,
) -> Result<GridGraph, MazeError> {
    let mut maze = GridGraph::empty();
    if !connected.contains(root) {
        return Ok(maze);
    }

    let mut visited: BTreeSet<Coord> = BTreeSet::new();
    let mut stack = vec![Visit { node: root, arrived_from: root }];

    while let Some(visit) = stack.pop() {
        // Duplicate stack entries are normal: a node pushed from two
        // siblings is simply skipped on its second pop.
        if visited.contains(&visit.node) {
            continue;
        }

        maze.insert_node(visit.node);
        if visit.node != visit.arrived_from {
            maze.link(visit.node, visit.arrived_from);
        }
        visited.insert(visit.node);

        let mut remaining: Vec<Coord> = Vec::with_capacity(4);
        for neighbor in orthogonal_neighbors(visit.node) {
            if connected.has_edge(visit.node, neighbor) && !visited.contains(&neighbor) {
                remaining.push(neighbor);
            }
        }

        // Draw, remove, push, repeat. The draw order decides which sibling
        // ends up deepest on the stack, which shapes branchiness; replacing
        // this loop with a shuffle would change the mazes a seed produces.
        while !remaining.is_empty() {
            let index = sequence.pick_index(remaining.len());
            if index >= remaining.len() {
                return Err(MazeError::RandomDrawOutOfRange { index, len: remaining.len() });
            }
            let neighbor = remaining.remove(index);
            stack.push(Visit { node: neighbor, arrived_from: visit.node });
        }
    }

    Ok(maze)
}
