use egui::Color32;

use super::Shape;
use super::common;
use crate::point::Point;
use crate::renderer::Renderer;

/// Index of the corner the user pressed first. It never moves while drawing.
pub const ANCHOR: usize = 0;

/// Axis-aligned rectangle stored as four corners.
///
/// For an anchor `(x1, y1)` and an opposite corner `(x2, y2)` the corners are
/// kept in the fixed order `(x1, y1), (x1, y2), (x2, y1), (x2, y2)`, which is
/// also the triangle-strip order used to fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    points: [Point; 4],
}

impl Rectangle {
    /// Start a rectangle at `anchor`; the three dependent corners are placeholders
    pub fn starting_at(anchor: Point) -> Self {
        Self {
            points: [anchor, Point::default(), Point::default(), Point::default()],
        }
    }

    /// Build a complete rectangle from two opposite corners.
    /// The dependent corners take the color of `opposite`.
    pub fn from_corners(anchor: Point, opposite: Point) -> Self {
        let mut rect = Self::starting_at(anchor);
        rect.set_opposite_corner(opposite.x, opposite.y, opposite.color);
        rect
    }

    pub fn anchor(&self) -> &Point {
        &self.points[ANCHOR]
    }

    /// Recompute the three dependent corners from the anchor and `(x2, y2)`.
    /// The anchor keeps its own color, the others are recolored.
    pub fn set_opposite_corner(&mut self, x2: f32, y2: f32, color: Color32) {
        let Point { x: x1, y: y1, .. } = self.points[ANCHOR];

        self.points[1].set_position(x1, y2);
        self.points[2].set_position(x2, y1);
        self.points[3].set_position(x2, y2);

        for point in &mut self.points[1..] {
            point.set_color(color);
        }
    }

    /// Collapse onto the anchor, producing a zero-area rectangle
    pub fn collapse(&mut self) {
        let anchor = self.points[ANCHOR];
        self.set_opposite_corner(anchor.x, anchor.y, anchor.color);
    }

    pub fn bounds(&self) -> egui::Rect {
        common::calculate_bounds(&self.points)
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_quad(self.points);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        for point in &mut self.points {
            point.translate(dx, dy);
        }
    }

    fn is_contain(&self, pos: &Point) -> bool {
        common::bounds_contain(self.bounds(), pos)
    }
}
