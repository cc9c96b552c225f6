use egui::Color32;

/// Maximum scene-space distance at which a cursor position counts as "on" a point
pub const NEAR_TOLERANCE: f32 = 0.03;

/// A colored 2D coordinate in scene space.
///
/// Scene space spans roughly [-1, 1] on both axes with Y pointing up.
/// Points are mutated in place while a shape is being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub color: Color32,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            color: Color32::BLACK,
        }
    }
}

impl Point {
    pub fn new(x: f32, y: f32, color: Color32) -> Self {
        Self { x, y, color }
    }

    /// Create an uncolored (black) point at the given position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Proximity test used by hit-testing. Ignores color.
    pub fn is_near(&self, other: &Point) -> bool {
        self.distance(other) <= NEAR_TOLERANCE
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}
