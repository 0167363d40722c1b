//! Grid Store - dense row-major material storage.
//!
//! Every value-changing write marks the containing chunk dirty, so consumers
//! (collision meshing, render sync) only revisit chunks that changed.
//! Reads outside the grid return `Material::Empty`; writes outside the grid
//! are dropped. The grid is not safe for concurrent mutation: one tick owns it
//! exclusively.

use crate::chunks::{chunks_along, DirtyChunks};
use crate::materials::Material;

mod accessors;
mod indexing;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Material>,
    dirty: DirtyChunks,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Material::Empty; size],
            dirty: DirtyChunks::new(chunks_along(width), chunks_along(height)),
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dirty_chunks", &self.dirty.len())
            .finish()
    }
}
