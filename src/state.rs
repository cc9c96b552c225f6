use log::{debug, info};

use crate::input::InputEvent;
use crate::tools::{Tool, ToolContext, ToolKind, ToolType};

/// Owns the active tool and routes events to it.
///
/// Exactly one tool is active at a time; the outgoing tool is always reset
/// before the new one takes over.
#[derive(Debug, Clone)]
pub struct EditorState {
    active_tool: ToolType,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl EditorState {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            active_tool: kind.create(),
        }
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active_tool
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active_tool.kind()
    }

    /// Switch tools. Selecting the already active tool keeps its state.
    pub fn set_active_tool(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>) {
        if self.active_kind() == kind {
            return;
        }

        if self.active_tool.is_busy() {
            debug!("Abandoning unfinished {} gesture", self.active_tool.name());
        }
        self.active_tool.reset(ctx);
        info!("Tool changed: {} -> {}", self.active_tool.name(), kind.name());
        self.active_tool = kind.create();
    }

    /// Forward a pointer event to the matching handler of the active tool
    pub fn handle_event(&mut self, event: InputEvent, ctx: &mut ToolContext<'_>) {
        let tool = &mut self.active_tool;
        match event {
            InputEvent::Click(pos) => tool.on_click(pos, ctx),
            InputEvent::PointerDown(pos) => tool.on_pointer_down(pos, ctx),
            InputEvent::PointerMove(pos) => tool.on_pointer_move(pos, ctx),
            InputEvent::PointerUp(pos) => tool.on_pointer_up(pos, ctx),
        }
    }

    pub fn handle_input_value_change(&mut self, dx: f32, dy: f32, ctx: &mut ToolContext<'_>) {
        self.active_tool.on_input_value_change(dx, dy, ctx);
    }
}
