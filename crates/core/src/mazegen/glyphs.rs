//! Glyph overlay decorator: traces a bitmap into a grid graph's edges.

use crate::types::Coord;

use super::graph::GridGraph;

/// 5x7 bitmap for the letter A. Rows are y, columns x, `X` marks a lit cell.
pub const GLYPH_A: [&str; 7] =
    [" XXXX", "X   X", "X   X", "XXXXX", "X   X", "X   X", "X   X"];

/// Returns an edge-free copy of `connected` whose edges trace `glyph`:
/// orthogonally adjacent lit cells are linked, everything else stays
/// unconnected. Lit cells outside the graph are skipped. The result can
/// be fed to the tile expander exactly like a carved maze; no glyph
/// semantics are validated here.
pub fn overlay_glyph(connected: &GridGraph, glyph: &[&str]) -> GridGraph {
    let mut traced = connected.copy_structure(false);

    for (y, row) in glyph.iter().enumerate() {
        let row = row.as_bytes();
        for (x, &cell) in row.iter().enumerate() {
            if cell != b'X' {
                continue;
            }
            let here = Coord { x: x as i32, y: y as i32 };
            // Linking only left and up keeps each adjacent pair at one edge.
            if x > 0 && row[x - 1] == b'X' {
                traced.link(here, Coord { x: here.x - 1, y: here.y });
            }
            if y > 0 && glyph[y - 1].as_bytes().get(x) == Some(&b'X') {
                traced.link(here, Coord { x: here.x, y: here.y - 1 });
            }
        }
    }

    traced
}
