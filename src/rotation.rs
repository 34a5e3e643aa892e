use crate::math::rotate_about;
use crate::shape::ShapeStore;
use crate::vertex::VERTEX_COUNT;

/// Recomputes every rotated vertex from the base polygon
///
/// Each base vertex is turned `angle` degrees about the cached pivot and
/// written to the same index of the rotated polygon.
pub fn rotate_shape(shape: &mut ShapeStore, angle: f64) {
    let pivot = shape.pivot_vertex();
    for i in 0..VERTEX_COUNT {
        let rotated = rotate_about(shape.base_vertex(i), pivot, angle);
        shape.set_rotated_vertex(i, rotated);
    }
}
