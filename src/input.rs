use egui::{Context, Pos2, Response};

use crate::geometry::CanvasTransform;
use crate::point::Point;

/// Pointer events in scene coordinates, as consumed by the tools
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed and released without dragging
    Click(Point),
    /// Primary button pressed
    PointerDown(Point),
    /// Pointer moved over the canvas, or anywhere while a press that began on the canvas is held
    PointerMove(Point),
    /// Primary button released after a press on the canvas
    PointerUp(Point),
}

/// Converts raw egui pointer input over the canvas into [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed_in_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's input. Events come out in the order down, move, up, click.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        response: &Response,
        transform: &CanvasTransform,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let canvas = transform.canvas();

        ctx.input(|input| {
            let pointer_pos = input.pointer.interact_pos().or(input.pointer.hover_pos());

            if input.pointer.primary_pressed() {
                if let Some(pos) = pointer_pos.filter(|pos| canvas.contains(*pos)) {
                    self.pressed_in_canvas = true;
                    events.push(InputEvent::PointerDown(transform.to_scene(pos)));
                }
            }

            if let Some(pos) = input.pointer.hover_pos() {
                let moved = Some(pos) != self.last_pointer_pos;
                if moved && (canvas.contains(pos) || self.pressed_in_canvas) {
                    events.push(InputEvent::PointerMove(transform.to_scene(pos)));
                }
                self.last_pointer_pos = Some(pos);
            } else {
                self.last_pointer_pos = None;
            }

            if input.pointer.primary_released() && self.pressed_in_canvas {
                self.pressed_in_canvas = false;
                if let Some(pos) = pointer_pos.or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp(transform.to_scene(pos)));
                }
            }
        });

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(InputEvent::Click(transform.to_scene(pos)));
            }
        }

        events
    }
}
