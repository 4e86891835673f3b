use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("terminal is {actual:?} but the board needs at least {needed:?}")]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },
}
