pub mod mazegen;
pub mod types;

pub use mazegen::{
    GridGraph, LcgSequence, NestOutcome, TileBuffer, TileGeometry, carve, expand, expand_into,
    extract_skeleton, nest, overlay_glyph,
};
pub use types::*;
