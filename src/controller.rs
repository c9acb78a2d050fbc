use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::Coords;
use crate::cell::{CellKind, Occupant};
use crate::food;
use crate::grid::Grid;
use crate::movement;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Crashed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Snake,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew { food_spawned: bool },
    Crashed(Collision),
    /// The round already crashed; nothing was processed.
    Halted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("position {pos:?} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Coords, size: usize },
    #[error("position {0:?} is used more than once")]
    Overlap(Coords),
    #[error("a {size}x{size} grid is too small, need at least 2x2")]
    GridTooSmall { size: usize },
}

/// Drives one snake over one grid, a tick at a time.
pub struct SnakeController<R = ChaCha8Rng> {
    grid: Grid,
    snake: Snake,
    state: RoundState,
    needs_food: bool,
    rng: R,
}

impl SnakeController<ChaCha8Rng> {
    pub fn seeded(size: usize, seed: u64) -> Result<Self, LayoutError> {
        SnakeController::new(size, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnakeController<R> {
    /// Starts a round: empty grid, head somewhere in the middle half of both
    /// axes heading right, and the first food.
    pub fn new(size: usize, mut rng: R) -> Result<Self, LayoutError> {
        // The middle range [N/4, 3N/4) is empty below 2x2
        if size < 2 {
            return Err(LayoutError::GridTooSmall { size });
        }
        let mut grid = Grid::new(size);

        let (lo, hi) = (size / 4, 3 * size / 4);
        let head = (rng.gen_range(lo..hi), rng.gen_range(lo..hi));
        grid.set_kind(head, CellKind::Player);

        let needs_food = !food::spawn(&mut grid, &mut rng);
        info!("new {}x{} round, head at {:?}", size, size, head);

        Ok(SnakeController {
            grid,
            snake: Snake::new(head, Direction::Right),
            state: RoundState::Running,
            needs_food,
            rng,
        })
    }

    /// Builds a running round around an existing snake and optional food.
    pub fn from_snake(
        size: usize,
        snake: Snake,
        food: Option<Coords>,
        rng: R,
    ) -> Result<Self, LayoutError> {
        let mut grid = Grid::new(size);

        for &pos in snake.segments().chain(food.iter()) {
            match grid.kind_at(pos) {
                None => return Err(LayoutError::OutOfBounds { pos, size }),
                Some(CellKind::Empty) => {}
                Some(_) => return Err(LayoutError::Overlap(pos)),
            }
            grid.set_kind(pos, CellKind::Player);
        }
        if let Some(pos) = food {
            grid.set_kind(pos, CellKind::Food);
        }

        Ok(SnakeController {
            grid,
            snake,
            state: RoundState::Running,
            needs_food: food.is_none(),
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn round_state(&self) -> RoundState {
        self.state
    }

    pub fn food(&self) -> Option<Coords> {
        self.grid.food()
    }

    /// Last write before a tick wins. Turning straight back into the neck is
    /// allowed and crashes on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state == RoundState::Crashed {
            return TickOutcome::Halted;
        }

        let direction = self.snake.direction();
        let head = self.snake.head();
        let resolution = movement::resolve(&self.grid, head, direction);

        match (resolution.target.occupant(), resolution.target.coords()) {
            (Occupant::Empty, Some(to)) => {
                debug_assert!(!resolution.collided);
                self.advance(to, false);
                if self.needs_food {
                    self.needs_food = !food::spawn(&mut self.grid, &mut self.rng);
                }
                TickOutcome::Moved
            }
            (Occupant::Food, Some(to)) => {
                self.advance(to, true);
                let food_spawned = food::spawn(&mut self.grid, &mut self.rng);
                self.needs_food = !food_spawned;
                debug!("ate food at {:?}, tail length {}", to, self.snake.tail().len());
                TickOutcome::Grew { food_spawned }
            }
            (Occupant::Player, _) => self.crash(Collision::Snake),
            _ => self.crash(Collision::Wall),
        }
    }

    fn advance(&mut self, to: Coords, grow: bool) {
        self.grid.set_kind(to, CellKind::Player);
        if let Some(freed) = self.snake.advance(to, grow) {
            self.grid.set_kind(freed, CellKind::Empty);
        }
    }

    fn crash(&mut self, collision: Collision) -> TickOutcome {
        match collision {
            Collision::Wall => info!("crashed into the wall at {:?}", self.snake.head()),
            Collision::Snake => warn!("self collision heading {:?} from {:?}", self.snake.direction(), self.snake.head()),
        }
        self.state = RoundState::Crashed;
        TickOutcome::Crashed(collision)
    }
}
