use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines do not fit a {size}x{size} board")]
    InvalidConfig { size: Coord, mines: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Could not place every mine, the cell picker kept repeating itself")]
    PlacementExhausted,
}

pub type Result<T> = core::result::Result<T, GameError>;
