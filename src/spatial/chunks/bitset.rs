use super::ChunkCoord;

/// Deduplicated set of dirty chunks, one bit per chunk.
///
/// Iteration yields chunks in ascending index order (row-major over chunk
/// coordinates), which keeps mesh rebuilds deterministic.
#[derive(Clone, Debug)]
pub struct DirtyChunks {
    chunks_x: u32,
    chunks_y: u32,
    bits: Vec<u64>,
    count: usize,
}

impl DirtyChunks {
    pub fn new(chunks_x: u32, chunks_y: u32) -> Self {
        let total = (chunks_x * chunks_y) as usize;
        Self {
            chunks_x,
            chunks_y,
            bits: vec![0u64; (total + 63) / 64],
            count: 0,
        }
    }

    // === BitSet Helpers ===

    #[inline(always)]
    fn set_bit(bits: &mut [u64], idx: usize) -> bool {
        let word = idx >> 6; // idx / 64
        let bit = idx & 63; // idx % 64
        let mask = 1u64 << bit;
        let was_set = bits[word] & mask != 0;
        bits[word] |= mask;
        !was_set
    }

    #[inline(always)]
    fn check_bit(bits: &[u64], idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < bits.len() && (bits[word] & (1u64 << bit)) != 0
    }

    // === Indexing ===

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    #[inline]
    pub fn total_chunks(&self) -> usize {
        (self.chunks_x * self.chunks_y) as usize
    }

    #[inline]
    pub fn contains_coord(&self, coord: ChunkCoord) -> bool {
        coord.cx < self.chunks_x && coord.cy < self.chunks_y
    }

    #[inline]
    pub fn index_of(&self, coord: ChunkCoord) -> usize {
        (coord.cy * self.chunks_x + coord.cx) as usize
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> ChunkCoord {
        let idx = idx as u32;
        ChunkCoord::new(idx % self.chunks_x, idx / self.chunks_x)
    }

    // === Dirty flags ===

    /// Mark a chunk dirty. Returns true if it was clean before.
    /// Coordinates outside the chunk grid are ignored.
    #[inline]
    pub fn mark(&mut self, coord: ChunkCoord) -> bool {
        if !self.contains_coord(coord) {
            return false;
        }
        let idx = self.index_of(coord);
        let newly = Self::set_bit(&mut self.bits, idx);
        if newly {
            self.count += 1;
        }
        newly
    }

    pub fn mark_all(&mut self) {
        for idx in 0..self.total_chunks() {
            Self::set_bit(&mut self.bits, idx);
        }
        self.count = self.total_chunks();
    }

    #[inline]
    pub fn is_dirty(&self, coord: ChunkCoord) -> bool {
        self.contains_coord(coord) && Self::check_bit(&self.bits, self.index_of(coord))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        if self.count == 0 {
            return;
        }
        self.bits.fill(0);
        self.count = 0;
    }

    /// Dirty chunks in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &word)| word != 0)
            .flat_map(move |(w, &word)| {
                let mut mask = word;
                std::iter::from_fn(move || {
                    if mask == 0 {
                        return None;
                    }
                    let bit = mask.trailing_zeros() as usize;
                    mask &= mask - 1; // Clear lowest set bit
                    Some(self.coord_of((w << 6) | bit))
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_twice_counts_once() {
        let mut dirty = DirtyChunks::new(4, 4);
        assert!(dirty.mark(ChunkCoord::new(1, 2)));
        assert!(!dirty.mark(ChunkCoord::new(1, 2)));
        assert_eq!(dirty.len(), 1);
        assert!(dirty.is_dirty(ChunkCoord::new(1, 2)));
    }

    #[test]
    fn out_of_range_coords_are_ignored() {
        let mut dirty = DirtyChunks::new(2, 2);
        assert!(!dirty.mark(ChunkCoord::new(2, 0)));
        assert!(dirty.is_empty());
        assert!(!dirty.is_dirty(ChunkCoord::new(5, 5)));
    }

    #[test]
    fn iterates_in_index_order_across_words() {
        // 10x10 = 100 chunks, spans two u64 words.
        let mut dirty = DirtyChunks::new(10, 10);
        dirty.mark(ChunkCoord::new(9, 9));
        dirty.mark(ChunkCoord::new(3, 0));
        dirty.mark(ChunkCoord::new(0, 7));

        let got: Vec<_> = dirty.iter().collect();
        assert_eq!(
            got,
            vec![ChunkCoord::new(3, 0), ChunkCoord::new(0, 7), ChunkCoord::new(9, 9)]
        );
    }

    #[test]
    fn clear_resets_everything() {
        let mut dirty = DirtyChunks::new(3, 3);
        dirty.mark_all();
        assert_eq!(dirty.len(), 9);
        assert_eq!(dirty.iter().count(), 9);
        dirty.clear();
        assert!(dirty.is_empty());
        assert_eq!(dirty.iter().count(), 0);
    }
}
