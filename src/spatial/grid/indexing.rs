use super::*;
use crate::chunks::ChunkCoord;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn chunks_x(&self) -> u32 { self.dirty.dimensions().0 }

    #[inline]
    pub fn chunks_y(&self) -> u32 { self.dirty.dimensions().1 }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Chunk containing cell `(x, y)`.
    #[inline]
    pub fn chunk_of(&self, x: u32, y: u32) -> ChunkCoord {
        ChunkCoord::of_cell(x, y)
    }

    /// Cell window `[x0, x1) × [y0, y1)` of a chunk, clipped to the grid.
    pub fn chunk_cell_bounds(&self, coord: ChunkCoord) -> (u32, u32, u32, u32) {
        let (x0, y0) = coord.origin();
        let x1 = (x0 + crate::chunks::CHUNK_SIZE).min(self.width);
        let y1 = (y0 + crate::chunks::CHUNK_SIZE).min(self.height);
        (x0.min(self.width), y0.min(self.height), x1, y1)
    }
}
