use crate::element::Shape;
use crate::point::Point;
use crate::scene::Scene;

/// A point located by [`find_point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointHit {
    pub model_index: usize,
    pub point_index: usize,
}

// Both searches walk the scene top-down: the most recently inserted model wins.

/// Find the first point near `pos`, scanning models from the top of the scene.
/// Within a model, points are checked in index order.
pub fn find_point(scene: &Scene, pos: &Point) -> Option<PointHit> {
    scene
        .iter()
        .enumerate()
        .rev()
        .find_map(|(model_index, model)| {
            model
                .points()
                .iter()
                .position(|point| point.is_near(pos))
                .map(|point_index| PointHit {
                    model_index,
                    point_index,
                })
        })
}

/// Find the topmost model whose interior contains `pos`
pub fn find_model(scene: &Scene, pos: &Point) -> Option<usize> {
    scene
        .iter()
        .enumerate()
        .rev()
        .find(|(_, model)| model.is_contain(pos))
        .map(|(index, _)| index)
}
