use egui::{Pos2, Rect};

use crate::point::Point;

/// Axis-aligned bounds of a set of scene points, min/max in scene units.
///
/// Returns `Rect::NOTHING` for an empty slice.
pub(crate) fn calculate_bounds(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}

/// Inclusive containment, so degenerate (zero-area) bounds still contain their own edge
pub(crate) fn bounds_contain(bounds: Rect, pos: &Point) -> bool {
    pos.x >= bounds.min.x && pos.x <= bounds.max.x && pos.y >= bounds.min.y && pos.y <= bounds.max.y
}
