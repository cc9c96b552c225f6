use egui::Color32;

use super::Shape;
use crate::point::Point;
use crate::renderer::Renderer;

/// A straight segment between two colored endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: [Point; 2],
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { points: [start, end] }
    }

    /// Start a line at `anchor` whose second endpoint is a placeholder at the origin
    pub fn starting_at(anchor: Point) -> Self {
        Self::new(anchor, Point::default())
    }

    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    pub fn end(&self) -> &Point {
        &self.points[1]
    }

    /// Move the second endpoint, recoloring it
    pub fn set_end(&mut self, x: f32, y: f32, color: Color32) {
        let end = &mut self.points[1];
        end.set_position(x, y);
        end.set_color(color);
    }

    /// Collapse the second endpoint onto the first, producing a zero-length line
    pub fn collapse(&mut self) {
        let start = self.points[0];
        self.points[1].set_position(start.x, start.y);
        self.points[1].set_color(start.color);
    }
}

impl Shape for Line {
    fn kind(&self) -> &'static str {
        "line"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_segment(self.points);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        for point in &mut self.points {
            point.translate(dx, dy);
        }
    }

    fn is_contain(&self, _pos: &Point) -> bool {
        // A segment has no interior; lines are only picked through their endpoints
        false
    }
}
