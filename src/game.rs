use crate::board::Board;
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::draw::{Drawable, Renderer};
use crate::error::GameError;
use crate::food::Food;
use crate::scores::ScoreStore;
use crate::snake::{Direction, MoveResult, Snake};

use log::{debug, error, info};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Turn(Direction),
    Other,
}

/// Input side of the game. `poll` must not block.
pub trait InputSource {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved(MoveResult),
    GameOver { score: u32, ranking: Vec<u32>, won: bool },
    /// Nothing to do until the game is restarted.
    Idle,
    Quit,
}

pub struct Game<R: Rng> {
    config: GameConfig,
    store: ScoreStore,
    rng: R,
    snake: Snake,
    food: Food,
    apples: u32,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let store = ScoreStore::with_capacity(config.scores_file.clone(), config.scores_kept);
        let snake = Snake::new(config.board);
        let food = Food::new(config.board, config.placement, |c| snake.occupies(c), &mut rng);

        Game { config, store, rng, snake, food, apples: 0, state: GameState::Playing }
    }

    #[cfg(test)]
    pub fn with_state(config: GameConfig, rng: R, snake: Snake, food: Food) -> Self {
        let mut game = Self::new(config, rng);
        game.snake = snake;
        game.food = food;
        game
    }

    pub fn board(&self) -> Board {
        self.config.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn apples(&self) -> u32 {
        self.apples
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Advances the game by one step. Doesn't draw or wait.
    pub fn tick<E>(&mut self, events: E) -> TickOutcome
    where
        E: IntoIterator<Item = InputEvent>,
    {
        for ev in events {
            match ev {
                InputEvent::Quit => return TickOutcome::Quit,
                InputEvent::Turn(dir) => {
                    if !self.snake.set_pending_direction(dir) {
                        debug!("ignored reversal to {:?}", dir);
                    }
                }
                InputEvent::Other => {}
            }
        }

        if self.state == GameState::GameOver {
            return TickOutcome::Idle;
        }

        let move_res = self.snake.step();
        if !move_res.is_moved() {
            return self.game_over(false);
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.apples += 1;
            debug!("ate apple #{}", self.apples);

            let snake = &self.snake;
            if !self.food.relocate(|c| snake.occupies(c), &mut self.rng) {
                // No room left for food
                return self.game_over(true);
            }
        }

        TickOutcome::Moved(move_res)
    }

    pub fn restart(&mut self) {
        self.snake.reset();
        let snake = &self.snake;
        self.food = Food::new(self.config.board, self.config.placement, |c| snake.occupies(c), &mut self.rng);
        self.apples = 0;
        self.state = GameState::Playing;
    }

    /// Plays until the player quits, restarting after every game over.
    pub fn run<I, D, C>(&mut self, input: &mut I, renderer: &mut D, clock: &mut C) -> Result<(), GameError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        renderer.clear()?;
        self.draw(renderer)?;

        loop {
            clock.wait_tick();
            let events = input.poll()?;

            match self.tick(events) {
                TickOutcome::Quit => {
                    info!("quitting with {} apples on the board", self.apples);
                    return Ok(());
                }
                TickOutcome::Moved(_) => self.draw(renderer)?,
                TickOutcome::GameOver { score, ranking, won } => {
                    renderer.show_scores(score, &ranking, won)?;
                    clock.pause(self.config.game_over_pause);
                    self.restart();
                    renderer.clear()?;
                    self.draw(renderer)?;
                }
                TickOutcome::Idle => {}
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw<D: Renderer + ?Sized>(&self, renderer: &mut D) -> Result<(), GameError> {
        let items: [&dyn Drawable; 2] = [&self.food, &self.snake];
        renderer.draw_frame(&items, self.snake.last_vacated())
    }

    fn game_over(&mut self, won: bool) -> TickOutcome {
        self.state = GameState::GameOver;
        let score = self.apples;
        info!("game over ({}), score {}", if won { "won" } else { "crashed" }, score);

        let ranking = self.store.save(score).unwrap_or_else(|e| {
            error!("could not save score: {}", e);
            vec![score]
        });

        TickOutcome::GameOver { score, ranking, won }
    }
}
