use crate::math::edge_function;
use crate::vertex::Vertex;
use crossterm::style::Color;

/// Color the canvas is cleared to before each frame
pub const BACKGROUND: Color = Color::Rgb { r: 0, g: 204, b: 204 };

/// A 2D drawing surface the frame driver hands its polygon to
pub trait RenderTarget {
    /// Size in pixels as (width, height)
    fn size(&self) -> (usize, usize);

    /// Fills the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Traces a closed path through `points` and fills it with `color`
    fn fill_polygon(&mut self, points: &[Vertex], color: Color);
}

/// In-memory pixel buffer
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Reallocates the buffer, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![BACKGROUND; width * height];
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Rasterizes a triangle with the bounding-box edge-function test
    fn fill_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex, color: Color) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (p0, p1, p2) = ([v0.x, v0.y], [v1.x, v1.y], [v2.x, v2.y]);

        let area = edge_function(&p0, &p1, &p2);
        if area == 0.0 {
            return;
        }

        // Compute bounding box of the triangle, clipped to the canvas
        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0);
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(self.width as f64 - 1.0);
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0);
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(self.height as f64 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        for y in min_y as usize..=max_y as usize {
            for x in min_x as usize..=max_x as usize {
                let p = [x as f64 + 0.5, y as f64 + 0.5];

                // Normalizing by the area makes both windings test positive
                let w0 = edge_function(&p1, &p2, &p) / area;
                let w1 = edge_function(&p2, &p0, &p) / area;
                let w2 = edge_function(&p0, &p1, &p) / area;

                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }
}

impl RenderTarget for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fans the polygon out from its first vertex, so it must be convex
    fn fill_polygon(&mut self, points: &[Vertex], color: Color) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            self.fill_triangle(first, pair[0], pair[1], color);
        }
    }
}
