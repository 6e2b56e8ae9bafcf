// error.rs - Error types for grid operations

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    IndexOutOfBounds { row: usize, col: usize, size: usize },

    #[error("Chunk width must be between 1 and 64 bits, got {width}")]
    InvalidChunkWidth { width: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
