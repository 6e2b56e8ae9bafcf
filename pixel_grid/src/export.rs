// export.rs - Packed bit export for firmware source code
//
// The grid is flattened row-major (on = 1, off = 0) and grouped into
// fixed-width chunks, each rendered as a `0b` literal:
//
//     {0b1100000000000000, 0b0000000000000000, ...};
//
// A 32x32 grid with 16-bit chunks gives exactly 64 literals. When the bit
// count is not a multiple of the chunk width, the last chunk keeps only the
// remaining bits and is padded with zeros on its low (right) end when it is
// rendered as a literal or a word.

use std::fmt;

use crate::error::{GridError, Result};

pub const DEFAULT_CHUNK_WIDTH: usize = 16;
pub const MAX_CHUNK_WIDTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitExport {
    bits: Vec<bool>,
    chunk_width: usize,
}

pub fn validate_chunk_width(chunk_width: usize) -> Result<()> {
    if chunk_width == 0 || chunk_width > MAX_CHUNK_WIDTH {
        return Err(GridError::InvalidChunkWidth { width: chunk_width });
    }
    Ok(())
}

impl BitExport {
    pub(crate) fn from_rows<'a>(
        rows: impl Iterator<Item = &'a [bool]>,
        bit_count: usize,
        chunk_width: usize,
    ) -> Self {
        let mut bits = Vec::with_capacity(bit_count);
        for row in rows {
            bits.extend_from_slice(row);
        }
        debug_assert_eq!(bits.len(), bit_count);
        Self { bits, chunk_width }
    }

    /// The flat row-major bit sequence, one entry per cell.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn chunk_width(&self) -> usize {
        self.chunk_width
    }

    pub fn chunk_count(&self) -> usize {
        self.bits.len().div_ceil(self.chunk_width)
    }

    /// Whether the final chunk holds fewer than `chunk_width` bits.
    pub fn is_padded(&self) -> bool {
        self.bits.len() % self.chunk_width != 0
    }

    pub fn chunks(&self) -> std::slice::Chunks<'_, bool> {
        self.bits.chunks(self.chunk_width)
    }

    /// Each chunk as an integer, first bit most significant.
    pub fn words(&self) -> Vec<u64> {
        self.chunks()
            .map(|chunk| {
                let value = chunk.iter().fold(0u64, |acc, &on| (acc << 1) | u64::from(on));
                // Left-align a short final chunk to match its padded literal.
                value << (self.chunk_width - chunk.len())
            })
            .collect()
    }
}

impl fmt::Display for BitExport {
    /// Writes the brace-delimited literal list followed by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, chunk) in self.chunks().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("0b")?;
            for &on in chunk {
                f.write_str(if on { "1" } else { "0" })?;
            }
            for _ in chunk.len()..self.chunk_width {
                f.write_str("0")?;
            }
        }
        f.write_str("};\n")
    }
}
