use log::{debug, info};

use super::{Tool, ToolContext, ToolKind};
use crate::element::Rectangle;
use crate::point::Point;

#[derive(Debug, Clone, Default)]
pub enum RectangleToolState {
    #[default]
    Idle,
    Drawing {
        rectangle: Rectangle,
        moved: bool,
    },
}

/// Click to anchor a corner, move to size the rectangle, click again to commit it
#[derive(Debug, Clone, Default)]
pub struct RectangleTool {
    state: RectangleToolState,
}

impl RectangleTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, RectangleToolState::Drawing { .. })
    }

    pub fn in_progress(&self) -> Option<&Rectangle> {
        match &self.state {
            RectangleToolState::Drawing { rectangle, .. } => Some(rectangle),
            RectangleToolState::Idle => None,
        }
    }
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            RectangleToolState::Idle => "Idle",
            RectangleToolState::Drawing { .. } => "Drawing",
        }
    }

    fn on_click(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match std::mem::take(&mut self.state) {
            RectangleToolState::Idle => {
                let anchor = pos.with_color(ctx.color);
                debug!("Rectangle anchored at ({:.3}, {:.3})", anchor.x, anchor.y);
                self.state = RectangleToolState::Drawing {
                    rectangle: Rectangle::starting_at(anchor),
                    moved: false,
                };
            }
            RectangleToolState::Drawing { mut rectangle, moved } => {
                if !moved {
                    rectangle.collapse();
                }
                info!("Committing rectangle {:?}", rectangle);
                ctx.scene.push(rectangle);
                ctx.redraw_canvas();
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        if let RectangleToolState::Drawing { rectangle, moved } = &mut self.state {
            rectangle.set_opposite_corner(pos.x, pos.y, ctx.color);
            *moved = true;

            ctx.redraw_canvas();
            ctx.draw_preview(&*rectangle);
        }
    }

    fn reset(&mut self, _ctx: &mut ToolContext<'_>) {
        self.state = RectangleToolState::Idle;
    }
}
