//! Terminal demo: generate a random obstacle maze and animate its A* solve.
//!
//! Run: cargo run --bin solve [seed]
//!
//! Obstacles are red, visited cells white and the final route green.
//! Press `q` or `Esc` to quit at any time.

use std::time::Duration;

use maze_demos::{FRAME_DELAY, Screen, quit_requested};
use maze_gen::{Maze, MazeConfig};
use maze_paths::{Heuristic, SearchState};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn run(seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = MazeConfig::default();
    let mut maze = Maze::generate(&config, StdRng::seed_from_u64(seed))?;

    let mut screen = Screen::open()?;
    screen.draw_grid(&maze.grid)?;
    screen.status(&maze.grid, &format!("seed {seed}: searching..."))?;

    let mut search = maze.search(Heuristic::Manhattan);
    while let Some(p) = search.step() {
        screen.draw_cells(search.grid(), [p])?;
        if quit_requested(FRAME_DELAY)? {
            return Ok(());
        }
    }

    let summary = match search.state() {
        SearchState::Found(path) => {
            screen.draw_cells(search.grid(), path.iter().copied())?;
            format!(
                "seed {seed}: {} moves, {} cells expanded - q to quit",
                path.moves(),
                search.expanded()
            )
        }
        _ => format!(
            "seed {seed}: no path, {} cells expanded - q to quit",
            search.expanded()
        ),
    };
    screen.status(search.grid(), &summary)?;

    while !quit_requested(Duration::from_millis(100))? {}
    Ok(())
}

fn main() {
    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Error: invalid seed {arg:?}: {e}");
                std::process::exit(2);
            }
        },
        None => rand::rng().random(),
    };

    if let Err(e) = run(seed) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
