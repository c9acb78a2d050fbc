use crate::Coords;

/// What currently occupies a grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Player,
    Food,
}

/// Classification of a move target. `Wall` never lives in the grid, it only
/// describes coordinates that fall outside of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    Player,
    Food,
    Wall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    kind: CellKind,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col, kind: CellKind::Empty }
    }

    pub fn coords(&self) -> Coords {
        (self.row, self.col)
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    // Only the grid reassigns occupancy
    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }
}

pub fn is_empty(cell: &Cell) -> bool {
    cell.kind == CellKind::Empty
}

pub fn is_player(cell: &Cell) -> bool {
    cell.kind == CellKind::Player
}

pub fn is_food(cell: &Cell) -> bool {
    cell.kind == CellKind::Food
}

/// A missing cell (out of the grid) classifies as a wall.
pub fn classify(cell: Option<&Cell>) -> Occupant {
    match cell {
        None => Occupant::Wall,
        Some(c) if is_player(c) => Occupant::Player,
        Some(c) if is_food(c) => Occupant::Food,
        Some(_) => Occupant::Empty,
    }
}
