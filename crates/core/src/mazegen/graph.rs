//! Sparse grid-graph model keyed by combined (x, y) coordinates.

use std::collections::BTreeMap;

use crate::types::Coord;

/// Lattice of nodes with per-node adjacency lists.
///
/// Nodes are identified purely by coordinate; adjacency is stored as
/// coordinates into the same graph, so copying a graph never aliases
/// the original's nodes. `BTreeMap` keeps iteration order deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridGraph {
    nodes: BTreeMap<Coord, Vec<Coord>>,
}

impl GridGraph {
    pub fn empty() -> Self {
        Self { nodes: BTreeMap::new() }
    }

    /// Allocates a `size_x` by `size_y` lattice, optionally linking each
    /// node to its existing orthogonal neighbors.
    pub fn grid(size_x: usize, size_y: usize, connected: bool) -> Self {
        let mut graph = Self::empty();
        for x in 0..size_x {
            for y in 0..size_y {
                graph.insert_node(Coord { x: x as i32, y: y as i32 });
            }
        }
        if connected {
            graph.connect_all();
        }
        graph
    }

    /// Links every node to its existing north/south/east/west neighbors.
    /// No wraparound, no diagonals. Only call this on an edge-free graph:
    /// repeating it duplicates every adjacency entry.
    pub fn connect_all(&mut self) {
        let coords: Vec<Coord> = self.nodes.keys().copied().collect();
        for coord in coords {
            for neighbor in orthogonal_neighbors(coord) {
                if !self.nodes.contains_key(&neighbor) {
                    continue;
                }
                if let Some(edges) = self.nodes.get_mut(&coord) {
                    edges.push(neighbor);
                }
            }
        }
    }

    /// Fresh graph with nodes at the same coordinates. With `keep_edges`
    /// the new adjacency lists mirror the old edge set; without it the
    /// copy is edge-free regardless of the input's edges.
    pub fn copy_structure(&self, keep_edges: bool) -> Self {
        let mut copy = Self::empty();
        for (coord, edges) in &self.nodes {
            let copied_edges = if keep_edges { edges.clone() } else { Vec::new() };
            copy.nodes.insert(*coord, copied_edges);
        }
        copy
    }

    /// Scans all nodes and returns `(max_x + 1, max_y + 1)`.
    /// An empty graph degenerates to `(0, 0)`. Nodes at negative
    /// coordinates never extend the reported size; callers that reject
    /// them (the tile expander does) catch them on their own pass.
    pub fn dimensions(&self) -> (usize, usize) {
        let mut size_x = 0_usize;
        let mut size_y = 0_usize;
        for coord in self.nodes.keys() {
            if let Ok(x) = usize::try_from(coord.x) {
                size_x = size_x.max(x + 1);
            }
            if let Ok(y) = usize::try_from(coord.y) {
                size_y = size_y.max(y + 1);
            }
        }
        (size_x, size_y)
    }

    pub fn insert_node(&mut self, coord: Coord) {
        self.nodes.entry(coord).or_default();
    }

    /// Pushes one adjacency entry into each endpoint. Endpoints missing
    /// from the graph are skipped rather than materialized.
    pub fn link(&mut self, a: Coord, b: Coord) {
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        if let Some(edges) = self.nodes.get_mut(&a) {
            edges.push(b);
        }
        if let Some(edges) = self.nodes.get_mut(&b) {
            edges.push(a);
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.nodes.contains_key(&coord)
    }

    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        self.nodes.get(&coord).map_or(&[], Vec::as_slice)
    }

    pub fn has_edge(&self, a: Coord, b: Coord) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bidirectional adjacency entries counted once per edge.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes.keys().copied()
    }

    /// Lowest node in coordinate order, if any.
    pub fn first_coord(&self) -> Option<Coord> {
        self.nodes.keys().next().copied()
    }
}

/// The four orthogonal neighbor coordinates in the fixed enumeration
/// order the carver depends on: north, south, east, west.
pub(crate) fn orthogonal_neighbors(coord: Coord) -> [Coord; 4] {
    [
        Coord { x: coord.x, y: coord.y - 1 },
        Coord { x: coord.x, y: coord.y + 1 },
        Coord { x: coord.x + 1, y: coord.y },
        Coord { x: coord.x - 1, y: coord.y },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_grid_links_every_interior_node_four_ways() {
        let graph = GridGraph::grid(3, 3, true);
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.neighbors(Coord { x: 1, y: 1 }).len(), 4);
        assert_eq!(graph.neighbors(Coord { x: 0, y: 0 }).len(), 2);
    }

    #[test]
    fn grid_without_connection_flag_has_no_edges() {
        let graph = GridGraph::grid(4, 2, false);
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn connections_never_wrap_or_go_diagonal() {
        let graph = GridGraph::grid(3, 3, true);
        let corner = Coord { x: 0, y: 0 };
        assert!(!graph.has_edge(corner, Coord { x: 2, y: 0 }));
        assert!(!graph.has_edge(corner, Coord { x: 1, y: 1 }));
    }

    #[test]
    fn copy_without_edges_keeps_coordinates_and_drops_every_edge() {
        let graph = GridGraph::grid(4, 4, true);
        let copy = graph.copy_structure(false);
        assert_eq!(copy.node_count(), graph.node_count());
        assert_eq!(copy.edge_count(), 0);
        for coord in graph.coords() {
            assert!(copy.contains(coord));
        }
    }

    #[test]
    fn copy_with_edges_mirrors_the_full_adjacency() {
        let graph = GridGraph::grid(3, 2, true);
        let copy = graph.copy_structure(true);
        assert_eq!(copy, graph);
    }

    #[test]
    fn dimensions_degenerate_to_zero_on_an_empty_graph() {
        assert_eq!(GridGraph::empty().dimensions(), (0, 0));
        assert_eq!(GridGraph::grid(5, 3, false).dimensions(), (5, 3));
    }

    #[test]
    fn dimensions_track_sparse_maxima_not_node_counts() {
        let mut graph = GridGraph::empty();
        graph.insert_node(Coord { x: 7, y: 2 });
        graph.insert_node(Coord { x: 1, y: 4 });
        assert_eq!(graph.dimensions(), (8, 5));
    }

    #[test]
    fn dimensions_ignore_negative_coordinates_instead_of_wrapping() {
        let mut graph = GridGraph::empty();
        graph.insert_node(Coord { x: -3, y: -1 });
        graph.insert_node(Coord { x: 2, y: 0 });
        assert_eq!(graph.dimensions(), (3, 1));
        assert_eq!(GridGraph::empty().dimensions(), (0, 0));
    }

    #[test]
    fn linking_a_missing_endpoint_is_a_no_op() {
        let mut graph = GridGraph::grid(2, 1, false);
        graph.link(Coord { x: 0, y: 0 }, Coord { x: 9, y: 9 });
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains(Coord { x: 9, y: 9 }));
    }

    #[test]
    fn repeated_connect_all_duplicates_edges_as_documented() {
        let mut graph = GridGraph::grid(2, 2, true);
        graph.connect_all();
        assert_eq!(graph.edge_count(), 8, "callers must connect a graph only once");
    }
}
