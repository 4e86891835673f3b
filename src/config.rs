use std::{path::PathBuf, time::Duration};

use crate::board::{Board, GridInt};
use crate::food::Placement;
use crate::scores::DEFAULT_CAPACITY;

pub const GRID_WIDTH: GridInt = 32;
pub const GRID_HEIGHT: GridInt = 24;
pub const CELL_SIZE: GridInt = 20;
pub const TICKS_PER_SECOND: u32 = 11;
pub const GAME_OVER_PAUSE: Duration = Duration::from_secs(3);
pub const SCORES_FILE: &str = "scores.txt";

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board: Board,
    pub ticks_per_second: u32,
    pub game_over_pause: Duration,
    pub scores_file: PathBuf,
    pub scores_kept: usize,
    pub placement: Placement,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: Board::new(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE),
            ticks_per_second: TICKS_PER_SECOND,
            game_over_pause: GAME_OVER_PAUSE,
            scores_file: PathBuf::from(SCORES_FILE),
            scores_kept: DEFAULT_CAPACITY,
            placement: Placement::default(),
        }
    }
}
