use anyhow::Result;
use clap::Parser;
use maze_core::{Coord, GridGraph, LcgSequence, TileGeometry, carve, expand, nest};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    iterations: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + rng.next_u64() as usize % (high - low + 1)
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Fuzzing maze pipeline on seed {} for {} iterations...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let size_x = pick(&mut rng, 1, 8);
        let size_y = pick(&mut rng, 1, 8);
        let cell_dim = pick(&mut rng, 1, 4);
        let corridor_dist = pick(&mut rng, 0, 3);
        let frame = pick(&mut rng, 0, 2);
        let carve_seed = rng.next_u64();

        let connected = GridGraph::grid(size_x, size_y, true);
        let mut sequence = LcgSequence::new(carve_seed);
        let maze = carve(&connected, Coord { x: 0, y: 0 }, &mut sequence)?;

        // Invariants: spanning tree over the full grid.
        let node_count = size_x * size_y;
        assert_eq!(
            maze.node_count(),
            node_count,
            "carve must reach every node (iteration {iteration}, seed {carve_seed})"
        );
        assert_eq!(
            maze.edge_count(),
            node_count - 1,
            "carved maze must be a tree (iteration {iteration}, seed {carve_seed})"
        );

        let geometry = TileGeometry::new(cell_dim, corridor_dist, frame);
        let buffer = expand(&maze, &geometry)?;
        assert_eq!(buffer.width, geometry.span(size_x), "buffer width must follow the formula");
        assert_eq!(buffer.height, geometry.span(size_y), "buffer height must follow the formula");

        // A nested pass over the fresh buffer must never step out of bounds.
        let mut nested = buffer.clone();
        nest(&mut nested, &TileGeometry::new(1, 1, frame), &mut sequence)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
