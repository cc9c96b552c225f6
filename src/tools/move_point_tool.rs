use log::{debug, info};

use super::{Tool, ToolContext, ToolKind};
use crate::element::{Line, Model, Shape};
use crate::point::Point;
use crate::scene::ModelId;

/// A model taken out of the scene for the duration of a drag
#[derive(Debug, Clone)]
pub struct DetachedModel {
    pub index: usize,
    pub id: ModelId,
    pub model: Model,
}

#[derive(Debug, Clone, Default)]
pub enum MovePointState {
    #[default]
    Idle,
    Moving {
        /// The line as it was before the drag, untouched
        original: DetachedModel,
        /// Ephemeral replacement: `[fixed reference endpoint, cursor]`
        line: Line,
    },
}

/// Drag one endpoint of a line while the other one stays put.
///
/// Only lines are handled. Pressing on a rectangle corner does nothing.
#[derive(Debug, Clone, Default)]
pub struct MovePointTool {
    state: MovePointState,
}

impl MovePointTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, MovePointState::Moving { .. })
    }

    /// The line being dragged
    pub fn ephemeral(&self) -> Option<&Line> {
        match &self.state {
            MovePointState::Moving { line, .. } => Some(line),
            MovePointState::Idle => None,
        }
    }

    /// The model removed from the scene when the drag started
    pub fn original(&self) -> Option<&Model> {
        match &self.state {
            MovePointState::Moving { original, .. } => Some(&original.model),
            MovePointState::Idle => None,
        }
    }
}

impl Tool for MovePointTool {
    fn name(&self) -> &'static str {
        "Move Point"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::MovePoint
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            MovePointState::Idle => "Idle",
            MovePointState::Moving { .. } => "Moving",
        }
    }

    fn on_pointer_down(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        if self.is_moving() {
            return;
        }

        let Some(hit) = ctx.find_point(&pos) else {
            return;
        };

        let Some(Model::Line(target)) = ctx.scene.get(hit.model_index) else {
            debug!(
                "Point {} of model {} is not a line endpoint, ignoring",
                hit.point_index, hit.model_index
            );
            return;
        };

        let grabbed_index = hit.point_index;
        let reference_index = if grabbed_index == 0 { 1 } else { 0 };

        // Points are Copy: the reference is a fresh snapshot, not a view into the scene
        let reference: Point = target.points()[reference_index];
        let cursor = pos.with_color(target.points()[grabbed_index].color);

        let Some((id, model)) = ctx.scene.remove(hit.model_index) else {
            return;
        };
        debug!("Grabbed point {} of line {}", grabbed_index, id);

        let line = Line::new(reference, cursor);
        ctx.redraw_canvas();
        ctx.draw_preview(&line);

        self.state = MovePointState::Moving {
            original: DetachedModel {
                index: hit.model_index,
                id,
                model,
            },
            line,
        };
    }

    fn on_pointer_move(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        if let MovePointState::Moving { line, .. } = &mut self.state {
            let color = line.end().color;
            line.set_end(pos.x, pos.y, color);

            ctx.redraw_canvas();
            ctx.draw_preview(&*line);
        }
    }

    fn on_pointer_up(&mut self, _pos: Point, ctx: &mut ToolContext<'_>) {
        if let MovePointState::Moving { line, .. } = std::mem::take(&mut self.state) {
            info!("Committing moved line {:?}", line);
            ctx.scene.push(line);
            ctx.redraw_canvas();
        }
    }

    fn reset(&mut self, ctx: &mut ToolContext<'_>) {
        if let MovePointState::Moving { original, .. } = std::mem::take(&mut self.state) {
            // Abandoned mid-drag: put the untouched line back where it was
            debug!("Restoring line {} at index {}", original.id, original.index);
            ctx.scene.insert(original.index, original.id, original.model);
            ctx.redraw_canvas();
        }
    }
}
