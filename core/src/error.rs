use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Faulty game description")]
    FaultyDescriptor,
    #[error("Too few walls in game description")]
    TooFewWalls,
    #[error("Too many walls in game description")]
    TooManyWalls,
    #[error("Wall array length does not match the grid")]
    InvalidWallCount,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Wall is a fixed clue and cannot be toggled")]
    FixedWall,
    #[error("Width and height must be at least two")]
    InvalidSize,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
