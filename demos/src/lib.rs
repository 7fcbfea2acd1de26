//! Terminal rendering shared by the demo binaries.
//!
//! Each grid cell is drawn as two blank columns with a background colour,
//! which keeps cells roughly square in most terminal fonts.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use maze_core::{CellState, Grid, Position};

/// Delay between two animation frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(10);

/// Background colour of a cell.
pub fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Free => Color::Black,
        CellState::Obstacle => Color::Rgb { r: 255, g: 0, b: 0 },
        CellState::Visited => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        CellState::OnPath => Color::Rgb { r: 0, g: 255, b: 0 },
    }
}

/// Owns the terminal while the demo runs: raw mode, alternate screen and a
/// hidden cursor, all restored on drop.
pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Draw the whole grid.
    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        for (p, state) in grid.iter() {
            self.queue_cell(p, state)?;
        }
        self.out.flush()
    }

    /// Redraw the given cells only.
    pub fn draw_cells(
        &mut self,
        grid: &Grid,
        cells: impl IntoIterator<Item = Position>,
    ) -> io::Result<()> {
        for p in cells {
            if let Some(state) = grid.at(p) {
                self.queue_cell(p, state)?;
            }
        }
        self.out.flush()
    }

    fn queue_cell(&mut self, p: Position, state: CellState) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo((p.col * 2) as u16, p.row as u16),
            SetBackgroundColor(cell_color(state)),
            Print("  ")
        )
    }

    /// Print a line of text below the grid.
    pub fn status(&mut self, grid: &Grid, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, grid.rows() as u16 + 1),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Grey),
            Print(text),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Wait up to `timeout` for a key press; returns `true` on `q` or `Esc`.
pub fn quit_requested(timeout: Duration) -> io::Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_distinguishes_states() {
        let states = [
            CellState::Free,
            CellState::Obstacle,
            CellState::Visited,
            CellState::OnPath,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(cell_color(*a), cell_color(*b));
            }
        }
    }
}
