use crate::vertex::Vertex;

/// World extent used when none is configured
pub const DEFAULT_WORLD_EXTENT: f64 = 5.0;

/// Maps a point in world coordinates to viewport coordinates
///
/// `[-n/2, n/2] x [-n/2, n/2]` maps onto `[0, width] x [height, 0]`, so the
/// world Y axis points up while the display Y axis points down.
pub fn map_to_viewport(x: f64, y: f64, extent: f64, width: f64, height: f64) -> Vertex {
    Vertex::new(
        (x + extent / 2.0) * width / extent,
        (-y + extent / 2.0) * height / extent,
    )
}

/// Rotates `point` by `degrees` about `pivot`
pub fn rotate_about(point: Vertex, pivot: Vertex, degrees: f64) -> Vertex {
    let (sin_a, cos_a) = degrees.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Vertex::new(
        pivot.x + dx * cos_a - dy * sin_a,
        pivot.y + dx * sin_a + dy * cos_a,
    )
}

/// Advances a rotation angle by `step` degrees, wrapped into `[0, 360)`
pub fn advance_angle(angle: f64, step: f64) -> f64 {
    (angle + step).rem_euclid(360.0)
}

/// Edge function used in rasterization
pub fn edge_function(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

#[cfg(test)]
pub(crate) fn assert_close(a: Vertex, b: Vertex) {
    const EPS: f64 = 1e-9;
    assert!(
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
        "{a:?} != {b:?}"
    );
}
