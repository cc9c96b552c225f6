use egui::{Color32, Mesh, Painter, Pos2, Shape as EguiShape, Vec2};

use crate::geometry::CanvasTransform;
use crate::point::Point;

/// Default canvas background: translucent black
pub const DEFAULT_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);

/// Drawing surface the models paint onto.
///
/// Calls are imperative: whatever was drawn stays until the next `clear`.
pub trait Renderer {
    /// Wipe the surface and fill it with the background color
    fn clear(&mut self);

    /// Paint a segment, blending from the first endpoint's color to the second's
    fn draw_segment(&mut self, points: [Point; 2]);

    /// Fill a quad given in triangle-strip order, blending the corner colors
    fn draw_quad(&mut self, points: [Point; 4]);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Segment([Point; 2]),
    Quad([Point; 4]),
}

impl DrawCommand {
    pub fn points(&self) -> &[Point] {
        match self {
            DrawCommand::Segment(points) => points,
            DrawCommand::Quad(points) => points,
        }
    }
}

/// Retained renderer: records the commands issued since the last clear and
/// replays them onto an egui painter every frame.
#[derive(Debug, Clone)]
pub struct DisplayList {
    background: Color32,
    line_width: f32,
    vertex_radius: Option<f32>,
    commands: Vec<DrawCommand>,
    clear_count: u64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, 2.0)
    }
}

impl DisplayList {
    pub fn new(background: Color32, line_width: f32) -> Self {
        Self {
            background,
            line_width,
            vertex_radius: None,
            commands: Vec::new(),
            clear_count: 0,
        }
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    /// Draw a dot of the given pixel radius on every vertex, or none
    pub fn set_vertex_radius(&mut self, radius: Option<f32>) {
        self.vertex_radius = radius;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&DrawCommand> {
        self.commands.last()
    }

    /// Number of times the surface has been cleared
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    /// Replay the recorded commands inside the canvas rectangle
    pub fn paint(&self, painter: &Painter, transform: &CanvasTransform) {
        painter.rect_filled(transform.canvas(), 0.0, self.background);

        for command in &self.commands {
            match command {
                DrawCommand::Segment([a, b]) => {
                    let a_pos = transform.point_to_screen(a);
                    let b_pos = transform.point_to_screen(b);
                    painter.add(gradient_segment(a_pos, b_pos, a.color, b.color, self.line_width));
                }
                DrawCommand::Quad(corners) => {
                    let mut mesh = Mesh::default();
                    for corner in corners {
                        mesh.colored_vertex(transform.point_to_screen(corner), corner.color);
                    }
                    // Triangle strip: (0, 1, 2), (1, 2, 3)
                    mesh.add_triangle(0, 1, 2);
                    mesh.add_triangle(1, 2, 3);
                    painter.add(EguiShape::mesh(mesh));
                }
            }

            if let Some(radius) = self.vertex_radius {
                for point in command.points() {
                    painter.circle_filled(transform.point_to_screen(point), radius, point.color);
                }
            }
        }
    }
}

impl Renderer for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn draw_segment(&mut self, points: [Point; 2]) {
        self.commands.push(DrawCommand::Segment(points));
    }

    fn draw_quad(&mut self, points: [Point; 4]) {
        self.commands.push(DrawCommand::Quad(points));
    }
}

/// A thick segment as a two-triangle mesh so each end keeps its own color
fn gradient_segment(a: Pos2, b: Pos2, a_color: Color32, b_color: Color32, width: f32) -> EguiShape {
    let direction = b - a;
    if direction.length() < f32::EPSILON {
        return EguiShape::circle_filled(a, width / 2.0, a_color);
    }

    let normal: Vec2 = direction.normalized().rot90() * (width / 2.0);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(a + normal, a_color);
    mesh.colored_vertex(a - normal, a_color);
    mesh.colored_vertex(b + normal, b_color);
    mesh.colored_vertex(b - normal, b_color);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    EguiShape::mesh(mesh)
}
