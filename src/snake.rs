use std::collections::VecDeque;

use crate::board::{Board, Cell};
use Direction::*;
use MoveResult::*;

use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Crashed
}

impl MoveResult {
    pub fn is_moved(&self) -> bool {
        matches!(self, Moved { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    board: Board,
    // Head first
    body: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    pending: Option<Direction>,
    last_vacated: Option<Cell>,
    alive: bool,
}

impl Snake {
    pub fn new(board: Board) -> Self {
        let mut snake = Snake {
            board,
            body: VecDeque::new(),
            length: 1,
            direction: Right,
            pending: None,
            last_vacated: None,
            alive: true,
        };
        snake.reset();
        snake
    }

    /// Builds a snake from explicit cells, head first.
    #[cfg(test)]
    pub fn from_cells(board: Board, cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty());
        Snake {
            board,
            body: cells.iter().copied().collect(),
            length: cells.len(),
            direction,
            pending: None,
            last_vacated: None,
            alive: true,
        }
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.board.center());
        self.length = 1;
        self.direction = Right;
        self.pending = None;
        self.last_vacated = None;
        self.alive = true;
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Tail cell given up by the last successful step, for the renderer to erase.
    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Buffers a turn for the next step. Reversals are refused.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !self.alive || direction.is_opposite(self.direction) {
            return false;
        }

        self.pending = Some(direction);
        true
    }

    pub fn step(&mut self) -> MoveResult {
        if !self.alive {
            return Crashed;
        }

        if let Some(dir) = self.pending.take() {
            if !dir.is_opposite(self.direction) {
                self.direction = dir;
            }
        }

        let old_head = self.head();
        let new_head = self.board.wrap(old_head, self.direction);

        if self.body.iter().skip(1).any(|c| *c == new_head) {
            debug!("snake of length {} crashed into itself at {:?}", self.len(), new_head);
            self.alive = false;
            return Crashed;
        }

        self.last_vacated = self.body.back().copied();
        self.body.push_front(new_head);

        let mut old_tail = None;
        while self.body.len() > self.length {
            old_tail = self.body.pop_back();
        }

        Moved { new_head, old_head, old_tail }
    }

    /// Takes effect on the next successful step.
    pub fn grow(&mut self) {
        if self.alive {
            self.length += 1;
        }
    }
}
