// error.rs - Failure kinds reported at the program boundary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {height}x{width}")]
    InvalidDimensions { height: i64, width: i64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("input error: {0}")]
    InputError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
