use egui::{Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2};

use crate::tools::ToolKind;

const BUTTON_SIZE: f32 = 32.0;
const GLYPH_MARGIN: f32 = 8.0;

/// Tool picker button showing a small drawing of what the tool does
pub struct ToolButton {
    pub tool: ToolKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ToolKind, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            ui.painter()
                .rect(rect, visuals.rounding, visuals.weak_bg_fill, visuals.bg_stroke);
            ui.painter()
                .extend(glyph(self.tool, rect.shrink(GLYPH_MARGIN), visuals.fg_stroke));
        }

        response.on_hover_text(self.tool.name())
    }
}

/// Shapes depicting `kind`, fitted into `area`
fn glyph(kind: ToolKind, area: Rect, stroke: Stroke) -> Vec<Shape> {
    let dot = stroke.width + 1.5;
    match kind {
        ToolKind::Line => vec![Shape::line_segment(
            [area.left_bottom(), area.right_top()],
            stroke,
        )],
        ToolKind::Rectangle => vec![Shape::rect_stroke(area, 0.0, stroke)],
        ToolKind::MovePoint => {
            let grabbed = area.right_top();
            vec![
                Shape::line_segment([area.left_bottom(), grabbed], stroke),
                Shape::circle_filled(grabbed, dot, stroke.color),
            ]
        }
        ToolKind::Translate => {
            let c = area.center();
            let (hw, hh) = (area.width() / 2.0, area.height() / 2.0);
            let mut shapes = vec![
                Shape::line_segment([Pos2::new(c.x - hw, c.y), Pos2::new(c.x + hw, c.y)], stroke),
                Shape::line_segment([Pos2::new(c.x, c.y - hh), Pos2::new(c.x, c.y + hh)], stroke),
            ];
            for tip in [area.left_center(), area.right_center(), area.center_top(), area.center_bottom()] {
                shapes.push(Shape::circle_filled(tip, dot * 0.75, stroke.color));
            }
            shapes
        }
    }
}
