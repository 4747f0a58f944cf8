use glam::DVec3;
use std::fmt;

/// A static boundary surface that particles interact with through a pair potential.
///
/// Every wall confines particles to one side of its surface. The `inside` flag
/// picks that side: `true` keeps particles in the interior (or, for planes, on
/// the side the normal points toward), `false` keeps them out.
pub trait Wall: Clone + Copy + fmt::Debug {
    /// The geometry family, used for capacity bookkeeping and error reports.
    const KIND: WallKind;

    /// Whether particles are confined to the interior of this wall.
    fn inside(&self) -> bool;

    /// Displacement of the surface as seen from `point`.
    ///
    /// Its length is the distance from `point` to the nearest point on the
    /// surface. It always points out of the confined region, so it is the
    /// same for a particle and for its mirror image across the surface, and
    /// flipping `inside` negates it.
    fn displacement(&self, point: DVec3) -> DVec3;

    /// Separation vector from the wall to `point`.
    ///
    /// This is the `r_ij` handed to pair evaluators, with the wall playing
    /// the role of particle `j`. A repulsive potential therefore always pushes
    /// the particle into the confined region.
    #[inline]
    fn separation(&self, point: DVec3) -> DVec3 {
        -self.displacement(point)
    }
}

/// The three supported geometry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    Sphere,
    Cylinder,
    Plane,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sphere => write!(f, "sphere"),
            Self::Cylinder => write!(f, "cylinder"),
            Self::Plane => write!(f, "plane"),
        }
    }
}

/// +1 for walls confining to the inside, -1 otherwise.
#[inline]
pub(crate) fn orientation(inside: bool) -> f64 {
    if inside { 1.0 } else { -1.0 }
}
