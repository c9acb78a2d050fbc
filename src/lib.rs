//! Grid snake: a movement and collision state machine over a square grid,
//! plus the terminal front end that drives it at a fixed tick rate.

// Core: pure simulation, no I/O
pub mod cell;
pub mod controller;
pub mod food;
pub mod grid;
pub mod movement;
pub mod snake;

// Shell: configuration, timing and the terminal
pub mod config;
pub mod errors;
pub mod game;
pub mod term;
pub mod ticker;

pub use controller::{Collision, RoundState, SnakeController, TickOutcome};
pub use snake::Direction;

pub type TermInt = u16;
pub type ScreenPos = (TermInt, TermInt);
/// Grid position as (row, column).
pub type Coords = (usize, usize);
