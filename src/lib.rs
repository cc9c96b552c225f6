#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod point;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod state;
pub mod tools;
pub mod widgets;

pub use app::PaintApp;
pub use element::{Line, Model, Rectangle, Shape};
pub use error::{OffsetInputError, SettingsError};
pub use geometry::{CanvasTransform, PointHit, find_model, find_point};
pub use input::{InputEvent, InputHandler};
pub use point::Point;
pub use renderer::{DisplayList, DrawCommand, Renderer};
pub use scene::{ModelId, Scene};
pub use settings::CanvasSettings;
pub use state::EditorState;
pub use tools::{Tool, ToolContext, ToolKind, ToolType};
pub use widgets::OffsetInputs;
