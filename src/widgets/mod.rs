mod offset_inputs;
mod tool_button;

pub use offset_inputs::OffsetInputs;
pub use tool_button::ToolButton;
