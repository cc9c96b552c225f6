use egui::{Color32, Painter, Rect, Response, Stroke};

use crate::element::Shape;
use crate::geometry::CanvasTransform;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::DisplayList;
use crate::scene::Scene;
use crate::settings::{CanvasSettings, SETTINGS_ENV_VAR};
use crate::state::EditorState;
use crate::tools::{Tool, ToolContext, ToolKind};
use crate::widgets::OffsetInputs;

/// Storage key for the persisted settings
pub const SETTINGS_KEY: &str = "vector_paint_settings";

const SELECTION_COLOR: Color32 = Color32::from_rgb(255, 210, 0);

/// Builds a [`ToolContext`] from disjoint fields of the app, leaving `editor` free
macro_rules! tool_context {
    ($app:expr) => {
        ToolContext::new(
            &mut $app.scene,
            &mut $app.display_list,
            &mut $app.offsets,
            $app.settings.tool_color,
        )
    };
}

pub struct PaintApp {
    settings: CanvasSettings,
    scene: Scene,
    display_list: DisplayList,
    offsets: OffsetInputs,
    editor: EditorState,
    input: InputHandler,
    transform: CanvasTransform,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(CanvasSettings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // An explicit settings file wins over whatever was saved last run
        let settings = if std::env::var_os(SETTINGS_ENV_VAR).is_some() {
            CanvasSettings::from_env()
        } else {
            cc.storage
                .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
                .unwrap_or_default()
        };

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: CanvasSettings) -> Self {
        let mut display_list = DisplayList::default();
        settings.apply_to(&mut display_list);

        Self {
            editor: EditorState::new(settings.initial_tool),
            settings,
            scene: Scene::new(),
            display_list,
            offsets: OffsetInputs::new(),
            input: InputHandler::new(),
            transform: CanvasTransform::new(Rect::NOTHING),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings_mut(&mut self) -> &mut CanvasSettings {
        &mut self.settings
    }

    pub fn offsets_mut(&mut self) -> &mut OffsetInputs {
        &mut self.offsets
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn active_kind(&self) -> ToolKind {
        self.editor.active_kind()
    }

    pub fn active_state_name(&self) -> &'static str {
        self.editor.active_tool().state_name()
    }

    pub fn set_active_tool(&mut self, kind: ToolKind) {
        let mut ctx = tool_context!(self);
        self.editor.set_active_tool(kind, &mut ctx);
        self.settings.initial_tool = kind;
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        let mut ctx = tool_context!(self);
        self.editor.handle_event(event, &mut ctx);
    }

    /// Read the offset fields and hand them to the active tool.
    /// Unparseable text is logged and ignored until it becomes a number.
    pub fn apply_offsets(&mut self) {
        match self.offsets.parse() {
            Ok((dx, dy)) => {
                let mut ctx = tool_context!(self);
                self.editor.handle_input_value_change(dx, dy, &mut ctx);
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    /// Translate this frame's pointer input on the canvas into tool events
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, response: &Response) {
        self.transform.set_canvas(response.rect);
        self.settings.apply_to(&mut self.display_list);

        let events = self.input.process_input(ctx, response, &self.transform);
        for event in events {
            self.handle_event(event);
        }
    }

    /// Paint the canvas and the selection highlight
    pub fn paint(&self, painter: &Painter) {
        self.display_list.paint(painter, &self.transform);

        if let Some(bounds) = self.selection_bounds() {
            painter.rect_stroke(bounds.expand(4.0), 0.0, Stroke::new(1.5, SELECTION_COLOR));
        }
    }

    /// Screen-space bounds of the model selected by the translate tool
    fn selection_bounds(&self) -> Option<Rect> {
        let index = self
            .editor
            .active_tool()
            .as_translate_tool()?
            .selected_index(&self.scene)?;
        let model = self.scene.get(index)?;

        let corners: Vec<_> = model
            .points()
            .iter()
            .map(|point| self.transform.point_to_screen(point))
            .collect();
        Some(Rect::from_points(&corners))
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
