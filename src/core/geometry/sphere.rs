use glam::DVec3;

use super::wall::{Wall, WallKind, orientation};
use crate::error::WallError;

/// Spherical wall of radius `radius` centered at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereWall {
    origin: DVec3,
    radius: f64,
    inside: bool,
}

impl Default for SphereWall {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            radius: 0.0,
            inside: true,
        }
    }
}

impl SphereWall {
    pub fn new(radius: f64, origin: DVec3, inside: bool) -> Result<Self, WallError> {
        if !(radius >= 0.0) {
            return Err(WallError::NegativeRadius {
                kind: WallKind::Sphere,
                radius,
            });
        }
        Ok(Self {
            origin,
            radius,
            inside,
        })
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Wall for SphereWall {
    const KIND: WallKind = WallKind::Sphere;

    fn inside(&self) -> bool {
        self.inside
    }

    /// A point sitting exactly on the center has no radial direction; it is
    /// resolved along +x so the result still has length `radius`.
    fn displacement(&self, point: DVec3) -> DVec3 {
        let shifted = point - self.origin;
        let r = shifted.length();
        let radial = if r > 0.0 { shifted / r } else { DVec3::X };
        orientation(self.inside) * (self.radius - r).abs() * radial
    }
}
