use std::time::Instant;

use crate::{Coords, ScreenPos, TermInt};
use crate::cell::CellKind;
use crate::config::Config;
use crate::controller::{RoundState, SnakeController, TickOutcome};
use crate::errors::{Error, Result};
use crate::snake::Direction::{self, *};
use crate::term::{Glyph, TermManager};
use crate::ticker::Ticker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: TermInt = 2;

const EMPTY_GLYPH: Glyph = Glyph::BLANK;
const SNAKE_BODY_GLYPH: Glyph = Glyph::new('█', Color::DarkBlue);
const FOOD_GLYPH: Glyph = Glyph::new('O', Color::Green);
const DEAD_SNAKE_GLYPH: Glyph = Glyph::new('X', Color::Red);

/// Whether the player wants another round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Again,
    Quit,
}

pub struct SnakeGame {
    config: Config,
    paused: bool,
    term: TermManager,
    board_origin: ScreenPos,
    session_rng: ChaCha8Rng,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("session seed {}", seed);

        Ok(SnakeGame {
            config,
            paused: false,
            term: TermManager::new()?,
            board_origin: (0, 0),
            session_rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (w, h) = self.term.get_terminal_size();
        let (need_w, need_h) = self.board_extent();
        if need_w > w || need_h > h {
            return Err(Error::TerminalTooSmall { need_w, need_h, have_w: w, have_h: h });
        }

        self.board_origin = ((w - need_w) / 2, (h - need_h) / 2);
        self.term.setup()?;
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()?;
        Ok(())
    }

    pub fn show_intro(&mut self) -> Result<Flow> {
        let lines = &[
            "Arrow keys, WASD or hjkl to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Again)
    }

    pub fn play(&mut self) -> Result<Flow> {
        self.term.clear()?;
        let extent = self.board_extent();
        self.term.draw_borders(self.board_origin, extent)?;
        self.paused = false;

        let round_seed = self.session_rng.gen();
        debug!("round seed {}", round_seed);
        let mut round = SnakeController::seeded(self.config.grid_size(), round_seed)?;
        let mut ticker = Ticker::new(self.config.tick_interval(), Instant::now());

        self.print_board(&round)?;

        loop {
            let wait = if self.paused { ticker.interval() } else { ticker.remaining(Instant::now()) };

            for key_ev in self.term.read_key_events(wait)? {
                if is_ctrl_c(&key_ev) {
                    return Ok(Flow::Quit);
                }
                match key_ev.code {
                    KeyCode::Esc => self.toggle_pause(&mut ticker)?,
                    // Last key before the tick wins, anything unmapped is ignored
                    code => if let Some(dir) = key_direction(code) {
                        round.set_direction(dir);
                    },
                }
            }

            if self.paused || !ticker.poll(Instant::now()) { continue; }

            match round.tick() {
                TickOutcome::Crashed(collision) => {
                    info!("round over: {:?}, length {}", collision, round.snake().tail().len() + 1);
                    self.game_over(&round)?;
                    break;
                },
                TickOutcome::Halted => break,
                TickOutcome::Moved | TickOutcome::Grew { .. } => self.print_board(&round)?,
            }
        } // Game loop

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }
        Ok(Flow::Again)
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Screen size of the board including its border.
    fn board_extent(&self) -> ScreenPos {
        let n = self.config.grid_size().min(TermInt::MAX as usize / 4) as TermInt;
        (n * CELL_WIDTH + 2, n + 2)
    }

    fn screen_pos(&self, (row, col): Coords) -> ScreenPos {
        let x = self.board_origin.0 + 1 + col as TermInt * CELL_WIDTH;
        let y = self.board_origin.1 + 1 + row as TermInt;
        (x, y)
    }

    fn print_cell(&mut self, pos: Coords, glyph: Glyph) -> Result<()> {
        let (x, y) = self.screen_pos(pos);
        for dx in 0..CELL_WIDTH {
            self.term.print_at((x + dx, y), glyph)?;
        }
        Ok(())
    }

    fn print_board(&mut self, round: &SnakeController) -> Result<()> {
        let crashed = round.round_state() == RoundState::Crashed;

        for cell in round.grid().cells() {
            let glyph = match cell.kind() {
                CellKind::Empty => EMPTY_GLYPH,
                CellKind::Food => FOOD_GLYPH,
                CellKind::Player if crashed => DEAD_SNAKE_GLYPH,
                CellKind::Player => SNAKE_BODY_GLYPH,
            };
            self.print_cell(cell.coords(), glyph)?;
        }

        if !crashed {
            let head = round.snake().head();
            self.print_cell(head, head_glyph(round.direction()))?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn game_over(&mut self, round: &SnakeController) -> Result<()> {
        self.print_board(round)?;

        self.term.show_message(&[
            "Game over!",
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;
        Ok(())
    }

    fn toggle_pause(&mut self, ticker: &mut Ticker) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
            ticker.reset(Instant::now());
        }

        self.paused = !self.paused;
        Ok(())
    }
}

fn head_glyph(direction: Direction) -> Glyph {
    Glyph::new(direction.head_char(), Color::Cyan)
}

/// Maps a key to a direction; `None` for keys that do not steer.
pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('k') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Char('h') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Char('j') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Char('l') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steering_keys_map_to_directions() {
        assert_eq!(key_direction(KeyCode::Up), Some(Up));
        assert_eq!(key_direction(KeyCode::Char('a')), Some(Left));
        assert_eq!(key_direction(KeyCode::Char('j')), Some(Down));
        assert_eq!(key_direction(KeyCode::Right), Some(Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_direction(KeyCode::Char('x')), None);
        assert_eq!(key_direction(KeyCode::Enter), None);
        assert_eq!(key_direction(KeyCode::Char('W')), None);
    }

    #[test]
    fn ctrl_c_is_detected() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_ctrl_c(&ctrl_c));
        assert!(!is_ctrl_c(&plain_c));
    }
}
