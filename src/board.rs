use crate::snake::Direction;

use rand::Rng;

pub type GridInt = u16;

/// A grid-aligned position, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: GridInt,
    pub y: GridInt,
}

impl Cell {
    pub const fn new(x: GridInt, y: GridInt) -> Self {
        Cell { x, y }
    }
}

/// Fixed-size toroidal grid. `cell_size` only matters when converting to
/// display coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: GridInt,
    height: GridInt,
    cell_size: GridInt,
}

impl Board {
    /// All three sizes must be non-zero.
    pub fn new(width: GridInt, height: GridInt, cell_size: GridInt) -> Self {
        debug_assert!(width > 0 && height > 0 && cell_size > 0, "empty board");
        Board { width, height, cell_size }
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn cell_size(&self) -> GridInt {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Moves one cell in `direction`, reappearing on the opposite edge when
    /// stepping off the grid.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let x = (i32::from(cell.x) + dx).rem_euclid(i32::from(self.width));
        let y = (i32::from(cell.y) + dy).rem_euclid(i32::from(self.height));
        Cell::new(x as GridInt, y as GridInt)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn to_display(&self, cell: Cell) -> (u32, u32) {
        let size = u32::from(self.cell_size);
        (u32::from(cell.x) * size, u32::from(cell.y) * size)
    }

    #[cfg(test)]
    pub fn from_display(&self, pos: (u32, u32)) -> Option<Cell> {
        let size = u32::from(self.cell_size);
        let cell = (pos.0 / size, pos.1 / size);
        if cell.0 >= u32::from(self.width) || cell.1 >= u32::from(self.height) {
            return None;
        }

        Some(Cell::new(cell.0 as GridInt, cell.1 as GridInt))
    }
}
