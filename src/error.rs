use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position out of bounds")]
    InvalidPosition,
    #[error("Mine count must be positive and smaller than the cell count")]
    InvalidConfig,
}

pub type Result<T> = std::result::Result<T, GameError>;
