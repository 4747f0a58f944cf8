pub mod evaluator;
pub mod params;

pub use evaluator::{WallEvaluator, WallForce};
pub use params::{WallParams, make_wall_params};
