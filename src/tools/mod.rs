use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::Shape;
use crate::geometry::{self, PointHit};
use crate::point::Point;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::widgets::OffsetInputs;

/// Everything a tool may touch while handling one event.
///
/// Built fresh by the dispatcher for each event, so a tool never holds on to
/// the scene between events.
pub struct ToolContext<'a> {
    pub scene: &'a mut Scene,
    pub renderer: &'a mut dyn Renderer,
    pub offsets: &'a mut OffsetInputs,
    /// Color applied to points the tools create
    pub color: Color32,
}

impl<'a> ToolContext<'a> {
    pub fn new(
        scene: &'a mut Scene,
        renderer: &'a mut dyn Renderer,
        offsets: &'a mut OffsetInputs,
        color: Color32,
    ) -> Self {
        Self {
            scene,
            renderer,
            offsets,
            color,
        }
    }

    /// Clear the surface and draw every committed model
    pub fn redraw_canvas(&mut self) {
        self.renderer.clear();
        self.scene.draw(&mut *self.renderer);
    }

    /// Draw an uncommitted shape on top of whatever is already on the surface
    pub fn draw_preview(&mut self, shape: &impl Shape) {
        shape.draw(&mut *self.renderer);
    }

    pub fn find_point(&self, pos: &Point) -> Option<PointHit> {
        geometry::find_point(&*self.scene, pos)
    }

    pub fn find_model(&self, pos: &Point) -> Option<usize> {
        geometry::find_model(&*self.scene, pos)
    }
}

/// Tool trait defines the interface for all editing tools.
///
/// Positions are already in scene space. Events a tool does not care about
/// are ignored.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    fn kind(&self) -> ToolKind;

    /// Name of the current state, for display and logging
    fn state_name(&self) -> &'static str;

    fn on_click(&mut self, _pos: Point, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_down(&mut self, _pos: Point, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_move(&mut self, _pos: Point, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_up(&mut self, _pos: Point, _ctx: &mut ToolContext<'_>) {}

    /// Called when the translate offset fields change
    fn on_input_value_change(&mut self, _dx: f32, _dy: f32, _ctx: &mut ToolContext<'_>) {}

    /// Drop any in-progress gesture and return to the initial state.
    /// Called by the dispatcher on the outgoing tool whenever the tool changes.
    fn reset(&mut self, ctx: &mut ToolContext<'_>);
}

// Tool implementations
mod line_tool;
pub use line_tool::{LineTool, LineToolState};

mod rectangle_tool;
pub use rectangle_tool::{RectangleTool, RectangleToolState};

mod move_point_tool;
pub use move_point_tool::{DetachedModel, MovePointState, MovePointTool};

mod translate_tool;
pub use translate_tool::{TranslateState, TranslateTool};

/// The editing modes, without any state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    MovePoint,
    Translate,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::MovePoint,
        ToolKind::Translate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::MovePoint => "Move Point",
            ToolKind::Translate => "Translate",
        }
    }

    /// Create a fresh tool of this kind in its initial state
    pub fn create(self) -> ToolType {
        match self {
            ToolKind::Line => ToolType::Line(LineTool::new()),
            ToolKind::Rectangle => ToolType::Rectangle(RectangleTool::new()),
            ToolKind::MovePoint => ToolType::MovePoint(MovePointTool::new()),
            ToolKind::Translate => ToolType::Translate(TranslateTool::new()),
        }
    }
}

/// Enum representing all available tools.
/// This allows us to avoid using Box<dyn Tool>.
#[derive(Debug, Clone)]
pub enum ToolType {
    Line(LineTool),
    Rectangle(RectangleTool),
    MovePoint(MovePointTool),
    Translate(TranslateTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Line(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::MovePoint(tool) => tool.name(),
            Self::Translate(tool) => tool.name(),
        }
    }

    fn kind(&self) -> ToolKind {
        match self {
            Self::Line(tool) => tool.kind(),
            Self::Rectangle(tool) => tool.kind(),
            Self::MovePoint(tool) => tool.kind(),
            Self::Translate(tool) => tool.kind(),
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            Self::Line(tool) => tool.state_name(),
            Self::Rectangle(tool) => tool.state_name(),
            Self::MovePoint(tool) => tool.state_name(),
            Self::Translate(tool) => tool.state_name(),
        }
    }

    fn on_click(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.on_click(pos, ctx),
            Self::Rectangle(tool) => tool.on_click(pos, ctx),
            Self::MovePoint(tool) => tool.on_click(pos, ctx),
            Self::Translate(tool) => tool.on_click(pos, ctx),
        }
    }

    fn on_pointer_down(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.on_pointer_down(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_down(pos, ctx),
            Self::MovePoint(tool) => tool.on_pointer_down(pos, ctx),
            Self::Translate(tool) => tool.on_pointer_down(pos, ctx),
        }
    }

    fn on_pointer_move(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.on_pointer_move(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_move(pos, ctx),
            Self::MovePoint(tool) => tool.on_pointer_move(pos, ctx),
            Self::Translate(tool) => tool.on_pointer_move(pos, ctx),
        }
    }

    fn on_pointer_up(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.on_pointer_up(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_up(pos, ctx),
            Self::MovePoint(tool) => tool.on_pointer_up(pos, ctx),
            Self::Translate(tool) => tool.on_pointer_up(pos, ctx),
        }
    }

    fn on_input_value_change(&mut self, dx: f32, dy: f32, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.on_input_value_change(dx, dy, ctx),
            Self::Rectangle(tool) => tool.on_input_value_change(dx, dy, ctx),
            Self::MovePoint(tool) => tool.on_input_value_change(dx, dy, ctx),
            Self::Translate(tool) => tool.on_input_value_change(dx, dy, ctx),
        }
    }

    fn reset(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Line(tool) => tool.reset(ctx),
            Self::Rectangle(tool) => tool.reset(ctx),
            Self::MovePoint(tool) => tool.reset(ctx),
            Self::Translate(tool) => tool.reset(ctx),
        }
    }
}

// Helper methods for ToolType
impl ToolType {
    pub fn as_translate_tool(&self) -> Option<&TranslateTool> {
        match self {
            Self::Translate(tool) => Some(tool),
            _ => None,
        }
    }

    /// True while a gesture is half done and would be lost by a tool switch
    pub fn is_busy(&self) -> bool {
        match self {
            Self::Line(tool) => tool.is_drawing(),
            Self::Rectangle(tool) => tool.is_drawing(),
            Self::MovePoint(tool) => tool.is_moving(),
            Self::Translate(_) => false,
        }
    }
}
