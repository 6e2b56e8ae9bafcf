//! Grid model for monochrome LED matrix images.
//!
//! [`PixelGrid`] holds an N x N matrix of on/off cells and supports toggling,
//! clearing and wrap-around scrolling in four directions. [`PixelGrid::export`]
//! packs the cells row-major into chunks of bits that render as `0b` literals
//! for embedding in firmware source.

pub mod error;
pub mod export;
pub mod grid;
pub mod patterns;

pub use error::{GridError, Result};
pub use export::{BitExport, DEFAULT_CHUNK_WIDTH, MAX_CHUNK_WIDTH, validate_chunk_width};
pub use grid::{DEFAULT_GRID_SIZE, Direction, PixelGrid};
pub use patterns::{PATTERNS, Pattern, apply_pattern};
