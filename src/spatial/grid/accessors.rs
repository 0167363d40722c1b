use super::*;
use crate::chunks::ChunkCoord;

impl Grid {
    // === Cell access ===

    /// Material at `(x, y)`, or `Empty` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Material {
        if !self.in_bounds(x, y) {
            return Material::Empty;
        }
        self.cells[self.index(x as u32, y as u32)]
    }

    /// Write a cell. Returns true if the value changed.
    ///
    /// Out-of-bounds writes and writes of the current value are no-ops and
    /// never dirty a chunk.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, material: Material) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (ux, uy) = (x as u32, y as u32);
        let idx = self.index(ux, uy);
        if self.cells[idx] == material {
            return false;
        }
        self.cells[idx] = material;
        self.dirty.mark(ChunkCoord::of_cell(ux, uy));
        true
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_empty()
    }

    /// Read-only view for the renderer.
    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// Raw material tags (`Material` is `repr(u8)`), for JS rendering.
    pub fn types_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }

    /// Reset every cell to Empty through the normal write path.
    pub fn clear(&mut self) {
        for idx in 0..self.size {
            if !self.cells[idx].is_empty() {
                let (x, y) = self.coords(idx);
                self.set(x as i32, y as i32, Material::Empty);
            }
        }
    }

    // === Dirty chunks ===

    #[inline]
    pub fn dirty_chunks(&self) -> &DirtyChunks {
        &self.dirty
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    #[inline]
    pub fn is_chunk_dirty(&self, coord: ChunkCoord) -> bool {
        self.dirty.is_dirty(coord)
    }

    /// Direct invalidation, for changes that must be re-meshed even though no
    /// cell value changed through `set`.
    #[inline]
    pub fn mark_chunk_dirty(&mut self, coord: ChunkCoord) {
        self.dirty.mark(coord);
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark_all();
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunks::CHUNK_SIZE;

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let mut grid = Grid::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                grid.set(x, y, Material::Stone);
            }
        }
        assert_eq!(grid.get(-1, 0), Material::Empty);
        assert_eq!(grid.get(0, -1), Material::Empty);
        assert_eq!(grid.get(8, 0), Material::Empty);
        assert_eq!(grid.get(0, 8), Material::Empty);
        assert_eq!(grid.get(i32::MAX, i32::MIN), Material::Empty);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut grid = Grid::new(8, 8);
        assert!(!grid.set(8, 3, Material::Sand));
        assert!(!grid.set(-1, 3, Material::Sand));
        assert!(grid.dirty_chunks().is_empty());
        assert!(grid.cells().iter().all(|m| m.is_empty()));
    }

    #[test]
    fn same_value_write_does_not_dirty() {
        let mut grid = Grid::new(128, 128);
        assert!(!grid.set(3, 3, Material::Empty));
        assert!(grid.dirty_chunks().is_empty());

        assert!(grid.set(70, 3, Material::Sand));
        grid.clear_dirty();
        assert!(!grid.set(70, 3, Material::Sand));
        assert!(grid.dirty_chunks().is_empty());
    }

    #[test]
    fn change_dirties_only_the_containing_chunk() {
        let mut grid = Grid::new(CHUNK_SIZE * 2, CHUNK_SIZE * 2);
        grid.set(CHUNK_SIZE as i32 + 1, 5, Material::Stone);
        let dirty: Vec<_> = grid.dirty_chunks().iter().collect();
        assert_eq!(dirty, vec![ChunkCoord::new(1, 0)]);
    }

    #[test]
    fn chunk_window_is_clipped_to_the_grid() {
        let grid = Grid::new(CHUNK_SIZE + 10, 20);
        assert_eq!(grid.chunks_x(), 2);
        assert_eq!(grid.chunks_y(), 1);
        assert_eq!(
            grid.chunk_cell_bounds(ChunkCoord::new(1, 0)),
            (CHUNK_SIZE, 0, CHUNK_SIZE + 10, 20)
        );
    }

    #[test]
    fn clear_dirties_touched_chunks_only() {
        let mut grid = Grid::new(CHUNK_SIZE * 2, CHUNK_SIZE);
        grid.set(1, 1, Material::Sand);
        grid.clear_dirty();
        grid.clear();
        assert_eq!(grid.get(1, 1), Material::Empty);
        assert_eq!(grid.dirty_chunks().len(), 1);
    }
}
