//! Random obstacle placement.
//!
//! Obstacles are drawn uniformly without replacement from the cells a
//! [`MazeConfig`] leaves eligible, so generation always terminates, even
//! when the requested count fills every eligible cell.

use std::collections::BTreeSet;

use log::debug;
use maze_core::Position;
use rand::{Rng, RngExt};

use crate::config::MazeConfig;
use crate::error::MazeError;

/// Samples obstacle layouts with an injected random source.
pub struct ObstacleGenerator<R: Rng> {
    pub rng: R,
}

impl<R: Rng> ObstacleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick exactly `config.obstacle_count` distinct cells, none of them
    /// reserved by the configuration.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<BTreeSet<Position>, MazeError> {
        config.validate()?;

        let mut eligible: Vec<Position> = config
            .bounds()
            .iter()
            .filter(|&p| !config.is_reserved(p))
            .collect();
        let n = config.obstacle_count;

        // Partial Fisher-Yates: the first `n` slots end up holding a uniform
        // sample of the eligible cells.
        for i in 0..n {
            let j = self.rng.random_range(i..eligible.len());
            eligible.swap(i, j);
        }
        eligible.truncate(n);

        debug!(
            "sampled {n} obstacles on a {} grid ({} cells reserved)",
            config.bounds(),
            config.bounds().len() - config.eligible_count()
        );
        Ok(eligible.into_iter().collect())
    }
}

/// Sample an obstacle layout using the thread-local random source.
pub fn generate_obstacles(config: &MazeConfig) -> Result<BTreeSet<Position>, MazeError> {
    ObstacleGenerator::new(rand::rng()).generate(config)
}
