//! Random obstacle mazes: configuration, obstacle sampling, maze assembly.

pub mod config;
pub mod error;
pub mod maze;
pub mod obstacles;

pub use config::{ExclusionSet, MazeConfig};
pub use error::MazeError;
pub use maze::Maze;
pub use obstacles::{ObstacleGenerator, generate_obstacles};
