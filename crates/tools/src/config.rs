//! JSON parameter file for maze generation runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Generation parameters loadable from disk. Missing fields fall back
/// to the defaults, so a config file only needs the values it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    pub size_x: usize,
    pub size_y: usize,
    pub seed: Option<u64>,
    pub cell_dim: usize,
    pub corridor_dist: usize,
    pub frame: usize,
    /// Finer cell/corridor scales for nested passes, applied in order.
    pub nest_scales: Vec<usize>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size_x: 5,
            size_y: 5,
            seed: None,
            cell_dim: 3,
            corridor_dist: 1,
            frame: 1,
            nest_scales: Vec::new(),
        }
    }
}

impl GenerationConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
