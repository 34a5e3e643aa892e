/// Number of vertices in the animated polygon
pub const VERTEX_COUNT: usize = 4;

/// A point in display space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }
}

/// Ordered vertices tracing the polygon boundary
pub type Polygon = [Vertex; VERTEX_COUNT];
