//! Rectangles and sizes in logical canvas units.

/// Edge length of the logical logo canvas.
pub const CANVAS_SIZE: f32 = 800.0;

/// A rectangle in logical canvas units (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X offset from the left edge of the canvas
    pub x: f32,
    /// Y offset from the top edge of the canvas
    pub y: f32,
    /// Width in canvas units
    pub width: f32,
    /// Height in canvas units
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a square of edge `size` centered on `(cx, cy)`.
    pub fn centered_square(cx: f32, cy: f32, size: f32) -> Self {
        Self::new(cx - size / 2.0, cy - size / 2.0, size, size)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the horizontal center (x + width / 2).
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Returns the rectangle scaled about the origin.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}
