use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{
    Coord, GridGraph, LcgSequence, TileBuffer, TileGeometry, TileKind, carve, expand,
    mazegen::GLYPH_A, nest, overlay_glyph,
};

mod config;
mod seed;

use config::GenerationConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON parameter file; explicit flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    size_x: Option<usize>,
    #[arg(long)]
    size_y: Option<usize>,
    /// Carving seed; omitted means a fresh runtime-generated seed
    #[arg(long)]
    seed: Option<u64>,
    /// Tile width of one grid node's block
    #[arg(long)]
    cell_dim: Option<usize>,
    /// Tile length of the corridor between adjacent blocks
    #[arg(long)]
    corridor: Option<usize>,
    /// Wall-tile border thickness around the whole buffer
    #[arg(long)]
    frame: Option<usize>,
    /// Finer cell/corridor scale for a nested pass; repeatable, applied in order
    #[arg(long)]
    nest: Vec<usize>,
    /// Trace the built-in glyph into the grid instead of carving a maze
    #[arg(long, default_value_t = false)]
    glyph: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => GenerationConfig::load(path)
            .with_context(|| format!("failed to load config file: {}", path.display()))?,
        None => GenerationConfig::default(),
    };

    let size_x = args.size_x.unwrap_or(file_config.size_x);
    let size_y = args.size_y.unwrap_or(file_config.size_y);
    let cell_dim = args.cell_dim.unwrap_or(file_config.cell_dim);
    let corridor_dist = args.corridor.unwrap_or(file_config.corridor_dist);
    let frame = args.frame.unwrap_or(file_config.frame);
    let nest_scales =
        if args.nest.is_empty() { file_config.nest_scales.clone() } else { args.nest.clone() };
    let run_seed =
        args.seed.or(file_config.seed).unwrap_or_else(seed::generate_runtime_seed);

    let geometry = TileGeometry::new(cell_dim, corridor_dist, frame);
    let connected = GridGraph::grid(size_x, size_y, true);
    let mut sequence = LcgSequence::new(run_seed);

    let graph = if args.glyph {
        overlay_glyph(&connected, &GLYPH_A)
    } else {
        carve(&connected, Coord { x: 0, y: 0 }, &mut sequence)?
    };

    let mut buffer = expand(&graph, &geometry)?;
    println!(
        "seed {run_seed}: {size_x}x{size_y} grid, {} edges, {}x{} tiles",
        graph.edge_count(),
        buffer.width,
        buffer.height
    );

    for &scale in &nest_scales {
        let finer = TileGeometry::new(scale, scale, frame);
        let outcome = nest(&mut buffer, &finer, &mut sequence)?;
        println!(
            "nested at scale {scale}: {} nodes, {} edges",
            outcome.node_count, outcome.edge_count
        );
    }

    print!("{}", render_ascii(&buffer));
    Ok(())
}

fn render_ascii(buffer: &TileBuffer) -> String {
    let mut out = String::with_capacity((buffer.width + 1) * buffer.height);
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let tile = buffer.tile_at(Coord { x: x as i32, y: y as i32 });
            out.push(if tile == TileKind::Floor { '.' } else { '#' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_render_marks_floor_and_wall_per_tile() {
        let mut graph = GridGraph::empty();
        graph.insert_node(Coord { x: 0, y: 0 });
        graph.insert_node(Coord { x: 1, y: 0 });

        let buffer = expand(&graph, &TileGeometry::new(1, 1, 0)).unwrap();
        assert_eq!(render_ascii(&buffer), ".#.\n");
    }

    #[test]
    fn ascii_render_emits_one_line_per_buffer_row() {
        let buffer = TileBuffer::filled_with_walls(4, 3);
        assert_eq!(render_ascii(&buffer), "####\n####\n####\n");
    }
}
