//! Mapping between canvas pixels and scene space.
//!
//! Scene space is centered on the canvas and spans [-1, 1] on both axes, with
//! Y pointing up. Screen space is egui's logical pixels with Y pointing down.

use egui::{Pos2, Rect};

use crate::point::Point;

/// Maps pointer positions inside the canvas rectangle to scene coordinates and back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    canvas: Rect,
}

impl CanvasTransform {
    pub fn new(canvas: Rect) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas(&mut self, canvas: Rect) {
        self.canvas = canvas;
    }

    /// Convert a screen position to a scene point (uncolored).
    /// A zero-sized canvas maps everything to the origin.
    pub fn to_scene(&self, pos: Pos2) -> Point {
        let width = self.canvas.width();
        let height = self.canvas.height();
        if width <= 0.0 || height <= 0.0 {
            return Point::default();
        }

        let offset_x = pos.x - self.canvas.min.x;
        let offset_y = pos.y - self.canvas.min.y;

        let x = (offset_x / width) * 2.0 - 1.0;
        let y = (1.0 - offset_y / height) * 2.0 - 1.0;
        Point::at(x, y)
    }

    /// Convert scene coordinates back to a screen position
    pub fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        let offset_x = (x + 1.0) / 2.0 * self.canvas.width();
        let offset_y = (1.0 - (y + 1.0) / 2.0) * self.canvas.height();
        Pos2::new(self.canvas.min.x + offset_x, self.canvas.min.y + offset_y)
    }

    pub fn point_to_screen(&self, point: &Point) -> Pos2 {
        self.to_screen(point.x, point.y)
    }
}
