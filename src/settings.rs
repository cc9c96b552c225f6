use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::renderer::{DEFAULT_BACKGROUND, DisplayList};
use crate::tools::ToolKind;

/// Environment variable naming a JSON settings file
pub const SETTINGS_ENV_VAR: &str = "VECTOR_PAINT_SETTINGS";

/// User-facing canvas options.
///
/// Only options live here; the scene itself is never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct CanvasSettings {
    /// Color given to new points
    pub tool_color: Color32,
    pub background_color: Color32,
    /// Line thickness in pixels
    pub line_width: f32,
    /// Vertex dot radius in pixels
    pub vertex_radius: f32,
    pub show_vertices: bool,
    pub initial_tool: ToolKind,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            tool_color: Color32::from_rgb(100, 181, 246),
            background_color: DEFAULT_BACKGROUND,
            line_width: 2.0,
            vertex_radius: 3.0,
            show_vertices: true,
            initial_tool: ToolKind::Line,
        }
    }
}

impl CanvasSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`SETTINGS_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings file {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Push the rendering options into a display list
    pub fn apply_to(&self, display_list: &mut DisplayList) {
        display_list.set_background(self.background_color);
        display_list.set_line_width(self.line_width);
        display_list.set_vertex_radius(self.show_vertices.then_some(self.vertex_radius));
    }
}
