use glam::DVec3;

use super::wall::{Wall, WallKind, orientation};
use crate::error::WallError;

/// Infinite planar wall through `origin` with unit `normal`.
///
/// With `inside = true`, particles belong on the side the normal points toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWall {
    origin: DVec3,
    /// Unit length.
    normal: DVec3,
    inside: bool,
}

impl Default for PlaneWall {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::Z,
            inside: true,
        }
    }
}

impl PlaneWall {
    /// Builds a plane wall. `normal` is normalized here.
    pub fn new(origin: DVec3, normal: DVec3, inside: bool) -> Result<Self, WallError> {
        let normal = normal.try_normalize().ok_or(WallError::ZeroDirection {
            kind: WallKind::Plane,
            direction: "normal",
        })?;
        Ok(Self {
            origin,
            normal,
            inside,
        })
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed height of `point` above the plane, positive along the normal.
    pub fn height(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }
}

impl Wall for PlaneWall {
    const KIND: WallKind = WallKind::Plane;

    fn inside(&self) -> bool {
        self.inside
    }

    fn displacement(&self, point: DVec3) -> DVec3 {
        -orientation(self.inside) * self.height(point).abs() * self.normal
    }
}
