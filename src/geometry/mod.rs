pub mod hit_testing;
pub mod transform;

pub use hit_testing::{PointHit, find_model, find_point};
pub use transform::CanvasTransform;
