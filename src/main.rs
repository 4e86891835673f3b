use torus_snake::clock::FixedRateClock;
use torus_snake::config::GameConfig;
use torus_snake::game::Game;
use torus_snake::scores::ScoreStore;
use torus_snake::term::{KeyboardInput, TermManager};

use log::{info, warn};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let config = GameConfig::default();
    info!(
        "starting on a {}x{} board, scores in {}",
        config.board.width(),
        config.board.height(),
        config.scores_file.display()
    );

    match ScoreStore::new(&config.scores_file).top_n(1) {
        Ok(best) => info!("best score so far: {:?}", best.first()),
        Err(e) => warn!("score file is unreadable, new scores will not be saved: {}", e),
    }

    let mut clock = FixedRateClock::new(config.ticks_per_second);
    let mut term = TermManager::new(config.board);
    let mut game = Game::new(config, rand::thread_rng());

    term.setup()?;
    let res = game.run(&mut KeyboardInput, &mut term, &mut clock);
    // Leave the alternate screen before any error gets printed
    term.restore()?;
    res?;

    Ok(())
}
