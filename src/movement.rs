use crate::Coords;
use crate::cell::{self, Cell, Occupant};
use crate::grid::Grid;
use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Wall,
    Cell(Cell),
}

impl Target {
    pub fn occupant(&self) -> Occupant {
        match self {
            Target::Wall => Occupant::Wall,
            Target::Cell(c) => cell::classify(Some(c)),
        }
    }

    pub fn coords(&self) -> Option<Coords> {
        match self {
            Target::Wall => None,
            Target::Cell(c) => Some(c.coords()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub target: Target,
    /// True for walls and for any cell that is not empty. Food and the snake
    /// itself are told apart by `target`.
    pub collided: bool,
}

/// Works out where a head at `head` ends up after one step in `direction`.
/// Never mutates the grid.
pub fn resolve(grid: &Grid, head: Coords, direction: Direction) -> Resolution {
    match direction.step(head).and_then(|to| grid.get(to)) {
        Some(c) => Resolution { target: Target::Cell(*c), collided: !cell::is_empty(c) },
        None => Resolution { target: Target::Wall, collided: true },
    }
}
