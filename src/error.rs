use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Error)]
pub enum MathError {
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("bad data: {0}")]
    BadData(String),
}
