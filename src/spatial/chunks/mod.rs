//! Chunk System - fixed-size chunk partitioning for invalidation tracking.

mod bitset;

pub use bitset::DirtyChunks;

/// Chunk size in cells. Unit of collision-mesh invalidation.
pub const CHUNK_SIZE: u32 = 64;

/// Cells per chunk.
pub const CHUNK_AREA: usize = (CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Number of chunks needed to cover `cells` cells along one axis.
#[inline]
pub fn chunks_along(cells: u32) -> u32 {
    cells.div_ceil(CHUNK_SIZE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: u32,
    pub cy: u32,
}

impl ChunkCoord {
    #[inline]
    pub fn new(cx: u32, cy: u32) -> Self {
        Self { cx, cy }
    }

    /// Chunk containing cell `(x, y)`.
    #[inline]
    pub fn of_cell(x: u32, y: u32) -> Self {
        Self {
            cx: x / CHUNK_SIZE,
            cy: y / CHUNK_SIZE,
        }
    }

    /// Top-left cell of this chunk.
    #[inline]
    pub fn origin(self) -> (u32, u32) {
        (self.cx * CHUNK_SIZE, self.cy * CHUNK_SIZE)
    }
}
