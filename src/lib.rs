pub mod board;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod food;
pub mod game;
pub mod scores;
pub mod snake;
pub mod term;
