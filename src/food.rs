use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::Coords;
use crate::cell::{Cell, CellKind};
use crate::grid::Grid;

/// Marks one uniformly chosen empty cell as food. Returns false, leaving the
/// grid alone, when there is no empty cell left.
///
/// Callers must only spawn while no food is on the grid.
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let choices: Vec<Coords> = grid.empty_cells().map(Cell::coords).collect();

    match choices.choose(rng) {
        Some(&pos) => {
            debug!("food spawned at {:?}", pos);
            grid.set_kind(pos, CellKind::Food)
        }
        None => {
            debug!("no empty cell left for food");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn spawns_exactly_one_food() {
        let mut grid = Grid::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(spawn(&mut grid, &mut rng));
        assert_eq!(grid.count(CellKind::Food), 1);
        assert_eq!(grid.count(CellKind::Empty), 24);
    }

    #[test]
    fn full_grid_is_a_no_op() {
        let mut grid = Grid::new(3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set_kind((row, col), CellKind::Player);
            }
        }
        let before = grid.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(!spawn(&mut grid, &mut rng));
        assert_eq!(grid, before);
    }

    #[test]
    fn only_empty_cell_is_chosen() {
        let mut grid = Grid::new(2);
        grid.set_kind((0, 0), CellKind::Player);
        grid.set_kind((0, 1), CellKind::Player);
        grid.set_kind((1, 0), CellKind::Player);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(spawn(&mut grid, &mut rng));
        assert_eq!(grid.food(), Some((1, 1)));
    }

    fn never_lands_on_the_snake_prop(seed: u64, blocked: Vec<(u8, u8)>) -> bool {
        let mut grid = Grid::new(6);
        for (r, c) in blocked.iter() {
            grid.set_kind((*r as usize % 6, *c as usize % 6), CellKind::Player);
        }
        let players = grid.count(CellKind::Player);
        let placed = spawn(&mut grid, &mut ChaCha8Rng::seed_from_u64(seed));

        grid.count(CellKind::Player) == players
            && grid.count(CellKind::Food) == if placed { 1 } else { 0 }
            && placed == (players < 36)
    }

    #[test]
    fn never_lands_on_the_snake() {
        quickcheck(never_lands_on_the_snake_prop as fn(u64, Vec<(u8, u8)>) -> bool);
    }
}
