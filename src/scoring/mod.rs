mod engine;
mod levels;

pub use engine::{compute_points, PointsBasis, PointsResult};
pub use levels::{level_credit, LEVEL_CREDITS};
