use log::{debug, info};

use super::{Tool, ToolContext, ToolKind};
use crate::element::Shape;
use crate::point::Point;
use crate::scene::{ModelId, Scene};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslateState {
    #[default]
    Idle,
    Selected {
        model: ModelId,
    },
}

/// Click a shape to select it, then shift it with the offset fields.
///
/// Each offset change is applied on top of the shape's current position, so
/// entering the same values twice moves it twice.
#[derive(Debug, Clone, Default)]
pub struct TranslateTool {
    state: TranslateState,
}

impl TranslateTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ModelId> {
        match self.state {
            TranslateState::Selected { model } => Some(model),
            TranslateState::Idle => None,
        }
    }

    /// Current scene index of the selected model, if it is still in the scene
    pub fn selected_index(&self, scene: &Scene) -> Option<usize> {
        self.selected().and_then(|id| scene.index_of(id))
    }
}

impl Tool for TranslateTool {
    fn name(&self) -> &'static str {
        "Translate"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Translate
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            TranslateState::Idle => "Idle",
            TranslateState::Selected { .. } => "Selected",
        }
    }

    fn on_click(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        // A miss keeps the current selection
        let Some(id) = ctx.find_model(&pos).and_then(|index| ctx.scene.id_at(index)) else {
            debug!("Nothing to select at ({:.3}, {:.3})", pos.x, pos.y);
            return;
        };

        info!("Selected model {}", id);
        self.state = TranslateState::Selected { model: id };
        ctx.offsets.reset_to_zero();
    }

    fn on_input_value_change(&mut self, dx: f32, dy: f32, ctx: &mut ToolContext<'_>) {
        let TranslateState::Selected { model: id } = self.state else {
            return;
        };
        let Some(model) = ctx.scene.get_by_id_mut(id) else {
            return;
        };

        debug!("Translating model {} by ({}, {})", id, dx, dy);
        model.translate(dx, dy);
        ctx.redraw_canvas();
    }

    fn reset(&mut self, ctx: &mut ToolContext<'_>) {
        ctx.offsets.clear();
        self.state = TranslateState::Idle;
    }
}
