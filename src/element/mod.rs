use crate::point::Point;
use crate::renderer::Renderer;

mod common;
pub(crate) mod line;
pub(crate) mod rectangle;

pub use line::Line;
pub use rectangle::Rectangle;

/// Common behaviour of every shape stored in the scene
pub trait Shape {
    /// Get the shape type as a string
    fn kind(&self) -> &'static str;

    /// The ordered points making up this shape
    fn points(&self) -> &[Point];

    /// Paint this shape only, using each point's own color
    fn draw(&self, renderer: &mut dyn Renderer);

    /// Shift every point by the given offsets
    fn translate(&mut self, dx: f32, dy: f32);

    /// Test if the shape's interior contains the given scene position
    fn is_contain(&self, pos: &Point) -> bool;
}

/// Every kind of shape the scene can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Line(Line),
    Rectangle(Rectangle),
}

impl Shape for Model {
    fn kind(&self) -> &'static str {
        match self {
            Model::Line(l) => l.kind(),
            Model::Rectangle(r) => r.kind(),
        }
    }

    fn points(&self) -> &[Point] {
        match self {
            Model::Line(l) => l.points(),
            Model::Rectangle(r) => r.points(),
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            Model::Line(l) => l.draw(renderer),
            Model::Rectangle(r) => r.draw(renderer),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        match self {
            Model::Line(l) => l.translate(dx, dy),
            Model::Rectangle(r) => r.translate(dx, dy),
        }
    }

    fn is_contain(&self, pos: &Point) -> bool {
        match self {
            Model::Line(l) => l.is_contain(pos),
            Model::Rectangle(r) => r.is_contain(pos),
        }
    }
}

impl From<Line> for Model {
    fn from(line: Line) -> Self {
        Model::Line(line)
    }
}

impl From<Rectangle> for Model {
    fn from(rect: Rectangle) -> Self {
        Model::Rectangle(rect)
    }
}

/// Factory functions for creating models
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a line between two positions, both endpoints in `color`
    pub fn create_line(start: (f32, f32), end: (f32, f32), color: Color32) -> Model {
        Model::Line(Line::new(
            Point::new(start.0, start.1, color),
            Point::new(end.0, end.1, color),
        ))
    }

    /// Create a rectangle from two opposite corners, all corners in `color`
    pub fn create_rectangle(anchor: (f32, f32), opposite: (f32, f32), color: Color32) -> Model {
        Model::Rectangle(Rectangle::from_corners(
            Point::new(anchor.0, anchor.1, color),
            Point::new(opposite.0, opposite.1, color),
        ))
    }
}
