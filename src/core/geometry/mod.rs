pub mod wall;
pub mod sphere;
pub mod cylinder;
pub mod plane;

pub use wall::{Wall, WallKind};
pub use sphere::SphereWall;
pub use cylinder::CylinderWall;
pub use plane::PlaneWall;
