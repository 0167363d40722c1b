//! Collision Mesh Builder - incremental greedy meshing of dirty chunks.
//!
//! Consumes the grid's dirty set after all mutation for the tick has settled.
//! Only dirty chunks are re-meshed; every other chunk body keeps its rect list
//! and revision untouched. Clearing the dirty set is the caller's job, since
//! render sync reads the same set afterwards.

mod bodies;
mod greedy;

pub use bodies::{ChunkBodies, ChunkBody, CollisionRect};
pub use greedy::mesh_chunk_into;

use crate::chunks::{ChunkCoord, CHUNK_AREA};
use crate::grid::Grid;

/// Below this many dirty chunks the rebuild stays on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_CHUNKS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub chunks: u32,
    pub rects: u32,
}

pub struct CollisionMeshBuilder {
    bodies: ChunkBodies,
    cell_size: f32,
    rebuilt: Vec<ChunkCoord>,
    processed: Vec<bool>,
    rect_scratch: Vec<CollisionRect>,
}

impl CollisionMeshBuilder {
    pub fn new(chunks_x: u32, chunks_y: u32, cell_size: f32) -> Self {
        Self {
            bodies: ChunkBodies::new(chunks_x, chunks_y),
            cell_size,
            rebuilt: Vec::new(),
            processed: vec![false; CHUNK_AREA],
            rect_scratch: Vec::new(),
        }
    }

    #[inline]
    pub fn bodies(&self) -> &ChunkBodies {
        &self.bodies
    }

    #[inline]
    pub fn body(&self, coord: ChunkCoord) -> Option<&ChunkBody> {
        self.bodies.get(coord)
    }

    /// Chunks rebuilt by the most recent rebuild, in chunk-index order.
    #[inline]
    pub fn rebuilt(&self) -> &[ChunkCoord] {
        &self.rebuilt
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Change the world scale. Existing rects keep the old scale until their
    /// chunks are rebuilt; callers mark everything dirty afterwards.
    pub fn set_cell_size(&mut self, cell_size: f32) {
        self.cell_size = cell_size;
    }

    /// Rebuild every chunk in the grid's dirty set.
    pub fn rebuild_dirty(&mut self, grid: &Grid) -> RebuildSummary {
        self.rebuilt.clear();
        self.rebuilt.extend(grid.dirty_chunks().iter());
        self.rebuild_listed(grid)
    }

    fn rebuild_listed(&mut self, grid: &Grid) -> RebuildSummary {
        #[cfg(feature = "parallel")]
        {
            if self.rebuilt.len() >= PARALLEL_MIN_CHUNKS {
                return self.rebuild_listed_parallel(grid);
            }
        }

        let mut summary = RebuildSummary::default();
        for i in 0..self.rebuilt.len() {
            let coord = self.rebuilt[i];
            mesh_chunk_into(
                grid,
                coord,
                self.cell_size,
                &mut self.processed,
                &mut self.rect_scratch,
            );
            if let Some(body) = self.bodies.get_mut(coord) {
                body.replace(&self.rect_scratch);
                summary.chunks += 1;
                summary.rects += self.rect_scratch.len() as u32;
            }
        }
        summary
    }

    /// Each chunk is an independent read-only job on the settled grid.
    /// Results are applied in list order, so output matches the serial path.
    #[cfg(feature = "parallel")]
    fn rebuild_listed_parallel(&mut self, grid: &Grid) -> RebuildSummary {
        use rayon::prelude::*;

        let cell_size = self.cell_size;
        let meshes: Vec<Vec<CollisionRect>> = self
            .rebuilt
            .par_iter()
            .map_init(
                || vec![false; CHUNK_AREA],
                |processed, &coord| {
                    let mut out = Vec::new();
                    mesh_chunk_into(grid, coord, cell_size, processed, &mut out);
                    out
                },
            )
            .collect();

        let mut summary = RebuildSummary::default();
        for (coord, rects) in self.rebuilt.iter().zip(meshes.iter()) {
            if let Some(body) = self.bodies.get_mut(*coord) {
                body.replace(rects);
                summary.chunks += 1;
                summary.rects += rects.len() as u32;
            }
        }
        summary
    }
}
