use crate::board::Cell;
use crate::error::GameError;
use crate::food::Food;
use crate::snake::Snake;

/// What a drawable piece of game state looks like.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sprite {
    Apple,
    SnakeSegment,
}

pub trait Drawable {
    fn sprite(&self) -> Sprite;
    fn cells(&self) -> Vec<Cell>;
}

impl Drawable for Food {
    fn sprite(&self) -> Sprite {
        Sprite::Apple
    }

    fn cells(&self) -> Vec<Cell> {
        vec![self.position()]
    }
}

impl Drawable for Snake {
    fn sprite(&self) -> Sprite {
        Sprite::SnakeSegment
    }

    fn cells(&self) -> Vec<Cell> {
        self.body().iter().copied().collect()
    }
}

/// Output side of the game. The loop never draws anything itself.
pub trait Renderer {
    fn clear(&mut self) -> Result<(), GameError>;

    /// Erases `vacated`, then paints `items` in order.
    fn draw_frame(&mut self, items: &[&dyn Drawable], vacated: Option<Cell>) -> Result<(), GameError>;

    fn show_scores(&mut self, score: u32, ranking: &[u32], won: bool) -> Result<(), GameError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::food::Placement;

    #[test]
    fn sprites_and_cells() {
        let board = Board::new(8, 8, 1);
        let snake = Snake::new(board);
        let food = Food::at(board, Placement::Anywhere, Cell::new(1, 2));

        assert_eq!(snake.sprite(), Sprite::SnakeSegment);
        assert_eq!(snake.cells(), vec![board.center()]);
        assert_eq!(food.sprite(), Sprite::Apple);
        assert_eq!(food.cells(), vec![Cell::new(1, 2)]);
    }
}
