use crate::board::{Board, Cell};

use log::debug;
use rand::{seq::IteratorRandom, Rng};

/// Where new food is allowed to appear.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Any cell on the board, occupied or not.
    Anywhere,
    /// Only cells the snake doesn't cover.
    AvoidOccupied,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::AvoidOccupied
    }
}

#[derive(Clone, Debug)]
pub struct Food {
    board: Board,
    placement: Placement,
    position: Cell,
}

impl Food {
    /// Places the first food. If the board has no free cell under
    /// `AvoidOccupied`, the food starts at the board center.
    pub fn new<R, F>(board: Board, placement: Placement, occupied: F, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        let mut food = Food { board, placement, position: board.center() };
        food.relocate(occupied, rng);
        food
    }

    #[cfg(test)]
    pub fn at(board: Board, placement: Placement, position: Cell) -> Self {
        Food { board, placement, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random cell. Returns `false` when no cell is
    /// allowed, in which case the food stays put.
    pub fn relocate<R, F>(&mut self, occupied: F, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        let next = match self.placement {
            Placement::Anywhere => Some(self.board.random_cell(rng)),
            Placement::AvoidOccupied => self.board.cells().filter(|c| !occupied(*c)).choose(rng),
        };

        match next {
            Some(cell) => {
                debug!("food placed at {:?}", cell);
                self.position = cell;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn full_board_has_nowhere_to_go() {
        let board = Board::new(2, 2, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::at(board, Placement::AvoidOccupied, Cell::new(1, 1));
        assert!(!food.relocate(|_| true, &mut rng));
        assert_eq!(food.position(), Cell::new(1, 1));
    }

    #[test]
    fn single_free_cell_is_chosen() {
        let board = Board::new(3, 3, 1);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::at(board, Placement::AvoidOccupied, Cell::new(0, 0));
        assert!(food.relocate(|c| c != Cell::new(2, 1), &mut rng));
        assert_eq!(food.position(), Cell::new(2, 1));
    }

    #[test]
    fn anywhere_ignores_occupancy() {
        let board = Board::new(4, 4, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let food = Food::new(board, Placement::Anywhere, |_| true, &mut rng);
        assert!(board.contains(food.position()));
    }

    proptest! {
        #[test]
        fn avoid_occupied_never_lands_on_the_snake(
            seed in any::<u64>(),
            width in 2u16..12,
            height in 2u16..12,
            blocked in proptest::collection::vec((0u16..12, 0u16..12), 0..40),
        ) {
            let board = Board::new(width, height, 1);
            let blocked: Vec<Cell> = blocked
                .into_iter()
                .map(|(x, y)| Cell::new(x % width, y % height))
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut food = Food::at(board, Placement::AvoidOccupied, Cell::new(0, 0));

            let placed = food.relocate(|c| blocked.contains(&c), &mut rng);
            let free = board.cells().any(|c| !blocked.contains(&c));
            prop_assert_eq!(placed, free);
            if placed {
                prop_assert!(!blocked.contains(&food.position()));
            }
        }

        #[test]
        fn anywhere_stays_on_the_board(
            seed in any::<u64>(),
            width in 1u16..40,
            height in 1u16..40,
        ) {
            let board = Board::new(width, height, 20);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut food = Food::at(board, Placement::Anywhere, Cell::new(0, 0));
            for _ in 0..20 {
                prop_assert!(food.relocate(|_| true, &mut rng));
                prop_assert!(board.contains(food.position()));
            }
        }
    }
}
