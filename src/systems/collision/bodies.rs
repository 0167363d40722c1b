use crate::actors::Vec2;
use crate::chunks::ChunkCoord;

/// Axis-aligned collision rectangle in world units, centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl CollisionRect {
    /// Rect covering cells `[x, x + w) × [y, y + h)`.
    pub fn from_cells(x: u32, y: u32, w: u32, h: u32, cell_size: f32) -> Self {
        let wf = w as f32;
        let hf = h as f32;
        Self {
            center: Vec2::new(
                (x as f32 + wf * 0.5) * cell_size,
                (y as f32 + hf * 0.5) * cell_size,
            ),
            size: Vec2::new(wf * cell_size, hf * cell_size),
        }
    }

    /// Area in cells, given the cell size used to build it.
    pub fn cell_area(&self, cell_size: f32) -> f32 {
        (self.size.x / cell_size) * (self.size.y / cell_size)
    }
}

/// Static collision body of one chunk.
///
/// Created once for every chunk at world creation; its shape list is replaced
/// wholesale on each rebuild and `revision` is bumped.
#[derive(Clone, Debug)]
pub struct ChunkBody {
    coord: ChunkCoord,
    rects: Vec<CollisionRect>,
    revision: u64,
}

impl ChunkBody {
    fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            rects: Vec::new(),
            revision: 0,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn rects(&self) -> &[CollisionRect] {
        &self.rects
    }

    /// Number of rebuilds this body went through.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(super) fn replace(&mut self, rects: &[CollisionRect]) {
        self.rects.clear();
        self.rects.extend_from_slice(rects);
        self.revision += 1;
    }
}

/// Arena of chunk bodies indexed by chunk coordinate (row-major).
#[derive(Clone, Debug)]
pub struct ChunkBodies {
    chunks_x: u32,
    chunks_y: u32,
    bodies: Vec<ChunkBody>,
}

impl ChunkBodies {
    pub fn new(chunks_x: u32, chunks_y: u32) -> Self {
        let mut bodies = Vec::with_capacity((chunks_x * chunks_y) as usize);
        for cy in 0..chunks_y {
            for cx in 0..chunks_x {
                bodies.push(ChunkBody::new(ChunkCoord::new(cx, cy)));
            }
        }
        Self {
            chunks_x,
            chunks_y,
            bodies,
        }
    }

    #[inline]
    fn slot(&self, coord: ChunkCoord) -> Option<usize> {
        if coord.cx < self.chunks_x && coord.cy < self.chunks_y {
            Some((coord.cy * self.chunks_x + coord.cx) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkBody> {
        self.slot(coord).map(|i| &self.bodies[i])
    }

    pub(super) fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut ChunkBody> {
        self.slot(coord).map(move |i| &mut self.bodies[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChunkBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_rects(&self) -> usize {
        self.bodies.iter().map(|b| b.rects.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_centered_in_world_units() {
        let rect = CollisionRect::from_cells(10, 4, 3, 1, 2.0);
        assert_eq!(rect.center, Vec2::new(23.0, 9.0));
        assert_eq!(rect.size, Vec2::new(6.0, 2.0));
        assert_eq!(rect.cell_area(2.0), 3.0);
    }

    #[test]
    fn every_chunk_gets_a_body_up_front() {
        let bodies = ChunkBodies::new(3, 2);
        assert_eq!(bodies.len(), 6);
        assert_eq!(bodies.total_rects(), 0);
        assert_eq!(bodies.get(ChunkCoord::new(2, 1)).unwrap().coord(), ChunkCoord::new(2, 1));
        assert!(bodies.get(ChunkCoord::new(3, 0)).is_none());
    }
}
