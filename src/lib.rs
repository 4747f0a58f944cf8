// Wall Potential Architecture
pub mod core {
    pub mod field;
    pub mod geometry;
    pub mod math;
}

pub mod potentials {
    pub mod classical;
    pub mod registry;
}

pub mod investigation {
    pub mod probe;
}

pub mod compute;
pub mod config;
pub mod error;
pub mod walls;

pub use crate::core::field::{WallCollection, WallGroup};
pub use crate::core::geometry::{CylinderWall, PlaneWall, SphereWall, Wall, WallKind};
pub use crate::core::math::virial::Virial;
pub use crate::error::WallError;
pub use crate::potentials::registry::{PairEvaluator, PairForce};
pub use crate::walls::{WallEvaluator, WallForce, WallParams, make_wall_params};
