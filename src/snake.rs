use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn variants() -> &'static [Direction] {
        &[Up, Right, Down, Left]
    }

    /// Neighbouring coordinates one step away, or `None` when the step would
    /// leave the first row or column. The far edges are checked by the grid.
    pub fn step(self, (row, col): Coords) -> Option<Coords> {
        match self {
            Up => row.checked_sub(1).map(|r| (r, col)),
            Down => row.checked_add(1).map(|r| (r, col)),
            Left => col.checked_sub(1).map(|c| (row, c)),
            Right => col.checked_add(1).map(|c| (row, c)),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// The snake as a view over grid positions: the head plus the tail segments,
/// nearest to the head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    head: Coords,
    tail: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        Snake { head, tail: VecDeque::new(), direction }
    }

    pub fn with_tail<I>(head: Coords, tail: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Coords>,
    {
        Snake { head, tail: tail.into_iter().collect(), direction }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn tail(&self) -> &VecDeque<Coords> {
        &self.tail
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Head first, then the tail in order.
    pub fn segments(&self) -> impl Iterator<Item = &Coords> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Moves the head to `to`. The old head becomes the first tail segment.
    /// Unless growing, the far end of the tail is released and returned; with
    /// an empty tail that is the old head itself.
    pub(crate) fn advance(&mut self, to: Coords, grow: bool) -> Option<Coords> {
        let old_head = self.head;
        self.head = to;
        self.tail.push_front(old_head);

        if grow {
            None
        } else {
            self.tail.pop_back()
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, Arbitrary, Gen};

    use super::*;

    impl Arbitrary for Direction {
        fn arbitrary(g: &mut Gen) -> Direction {
            *g.choose(Direction::variants()).unwrap()
        }
    }

    #[test]
    fn step_offsets_one_cell() {
        assert_eq!(Up.step((2, 2)), Some((1, 2)));
        assert_eq!(Down.step((2, 2)), Some((3, 2)));
        assert_eq!(Left.step((2, 2)), Some((2, 1)));
        assert_eq!(Right.step((2, 2)), Some((2, 3)));
    }

    #[test]
    fn step_off_the_origin_is_none() {
        assert_eq!(Up.step((0, 3)), None);
        assert_eq!(Left.step((3, 0)), None);
    }

    fn step_is_one_cell_prop(row: u8, col: u8, dir: Direction) -> bool {
        let start = (row as usize + 1, col as usize + 1);
        match dir.step(start) {
            Some((r, c)) => r.abs_diff(start.0) + c.abs_diff(start.1) == 1,
            None => false,
        }
    }

    #[test]
    fn step_is_one_cell() {
        quickcheck(step_is_one_cell_prop as fn(u8, u8, Direction) -> bool);
    }

    #[test]
    fn advance_without_tail_releases_old_head() {
        let mut snake = Snake::new((2, 2), Right);
        assert_eq!(snake.advance((2, 3), false), Some((2, 2)));
        assert_eq!(snake.head(), (2, 3));
        assert!(snake.tail().is_empty());
    }

    #[test]
    fn advance_shifts_tail() {
        let mut snake = Snake::with_tail((2, 2), vec![(2, 1), (2, 0)], Right);
        assert_eq!(snake.advance((2, 3), false), Some((2, 0)));
        assert_eq!(snake.tail(), &VecDeque::from(vec![(2, 2), (2, 1)]));
    }

    #[test]
    fn growing_keeps_every_segment() {
        let mut snake = Snake::with_tail((2, 2), vec![(2, 1)], Right);
        assert_eq!(snake.advance((2, 3), true), None);
        let segments: Vec<Coords> = snake.segments().copied().collect();
        assert_eq!(segments, vec![(2, 3), (2, 2), (2, 1)]);
    }
}
