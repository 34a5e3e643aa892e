use crate::vertex::{Polygon, Vertex};

/// Base and rotated polygons plus the cached pivot coordinates
#[derive(Clone, Debug)]
pub struct ShapeStore {
    /// Committed position, before this frame's rotation
    base: Polygon,
    /// Position after this frame's rotation
    rotated: Polygon,
    pivot_index: usize,
    pivot: Vertex,
}

impl ShapeStore {
    /// Creates a store from display-space vertices, pivoting on `pivot_index`
    pub fn initialize(base: Polygon, pivot_index: usize) -> Self {
        let pivot_index = pivot_index % base.len();
        ShapeStore {
            base,
            // Same as a rotation by zero, which is what the first frame draws
            rotated: base,
            pivot_index,
            pivot: base[pivot_index],
        }
    }

    pub fn base(&self) -> &Polygon {
        &self.base
    }

    pub fn rotated(&self) -> &Polygon {
        &self.rotated
    }

    /// Returns the base vertex at `i`, wrapping around the polygon
    pub fn base_vertex(&self, i: usize) -> Vertex {
        self.base[i % self.base.len()]
    }

    /// Cached coordinates of the rotation center
    pub fn pivot_vertex(&self) -> Vertex {
        self.pivot
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot_index
    }

    /// Selects which base vertex the next commit takes the pivot from
    ///
    /// The cached coordinates stay put until [`ShapeStore::commit_rotated_as_base`].
    pub fn set_pivot_index(&mut self, index: usize) {
        self.pivot_index = index % self.base.len();
    }

    pub fn set_rotated_vertex(&mut self, i: usize, point: Vertex) {
        self.rotated[i] = point;
    }

    /// Copies the rotated polygon into the base and re-reads the pivot from it
    pub fn commit_rotated_as_base(&mut self) {
        self.base = self.rotated;
        self.pivot = self.base[self.pivot_index];
    }
}
