use log::{debug, info};

use super::{Tool, ToolContext, ToolKind};
use crate::element::Line;
use crate::point::Point;

/// Click once to anchor a line, move to aim it, click again to commit it
#[derive(Debug, Clone, Default)]
pub enum LineToolState {
    #[default]
    Idle,
    Drawing {
        line: Line,
        /// Whether the pointer moved since the anchor click
        moved: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct LineTool {
    state: LineToolState,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, LineToolState::Drawing { .. })
    }

    /// The line being drawn, not yet part of the scene
    pub fn in_progress(&self) -> Option<&Line> {
        match &self.state {
            LineToolState::Drawing { line, .. } => Some(line),
            LineToolState::Idle => None,
        }
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            LineToolState::Idle => "Idle",
            LineToolState::Drawing { .. } => "Drawing",
        }
    }

    fn on_click(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        match std::mem::take(&mut self.state) {
            LineToolState::Idle => {
                let anchor = pos.with_color(ctx.color);
                debug!("Line anchored at ({:.3}, {:.3})", anchor.x, anchor.y);
                self.state = LineToolState::Drawing {
                    line: Line::starting_at(anchor),
                    moved: false,
                };
            }
            LineToolState::Drawing { mut line, moved } => {
                if !moved {
                    line.collapse();
                }
                info!("Committing line {:?}", line);
                ctx.scene.push(line);
                ctx.redraw_canvas();
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        if let LineToolState::Drawing { line, moved } = &mut self.state {
            line.set_end(pos.x, pos.y, ctx.color);
            *moved = true;

            ctx.redraw_canvas();
            ctx.draw_preview(&*line);
        }
    }

    fn reset(&mut self, _ctx: &mut ToolContext<'_>) {
        self.state = LineToolState::Idle;
    }
}
