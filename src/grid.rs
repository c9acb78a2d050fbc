use crate::Coords;
use crate::cell::{self, Cell, CellKind};

/// Square grid of cells stored row-major. The grid owns every cell; the snake
/// and the food only refer to cells by coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .collect();

        Grid { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 < self.size && pos.1 < self.size
    }

    pub fn get(&self, pos: Coords) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn kind_at(&self, pos: Coords) -> Option<CellKind> {
        self.get(pos).map(Cell::kind)
    }

    /// Reassigns the occupant of the cell at `pos`. Returns false if `pos` is
    /// off the grid, in which case nothing changes.
    pub fn set_kind(&mut self, pos: Coords, kind: CellKind) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.cells[i].set_kind(kind);
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| cell::is_empty(c))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }

    /// Position of the first food cell, scanning row-major.
    pub fn food(&self) -> Option<Coords> {
        self.cells.iter().find(|c| cell::is_food(c)).map(Cell::coords)
    }

    fn index_of(&self, pos: Coords) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.0 * self.size + pos.1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_square_and_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().count(), 16);
        assert_eq!(grid.count(CellKind::Empty), 16);
        assert_eq!(grid.food(), None);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = Grid::new(3);
        let coords: Vec<Coords> = grid.cells().map(Cell::coords).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(coords[8], (2, 2));
        assert!(grid.cells().skip(6).all(|c| c.coords().0 == 2));
    }

    #[test]
    fn set_kind_mutates_in_place() {
        let mut grid = Grid::new(5);
        assert!(grid.set_kind((1, 2), CellKind::Food));
        assert_eq!(grid.kind_at((1, 2)), Some(CellKind::Food));
        assert_eq!(grid.food(), Some((1, 2)));
        assert_eq!(grid.empty_cells().count(), 24);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(5);
        assert!(grid.get((5, 0)).is_none());
        assert!(grid.get((0, 5)).is_none());
        assert!(!grid.set_kind((7, 7), CellKind::Player));
        assert_eq!(grid.count(CellKind::Player), 0);
    }

    #[test]
    fn zero_sized_grid_has_no_cells() {
        let grid = Grid::new(0);
        assert_eq!(grid.cells().count(), 0);
        assert!(!grid.contains((0, 0)));
    }
}
