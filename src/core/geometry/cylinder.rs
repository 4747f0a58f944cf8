use glam::DVec3;

use super::wall::{Wall, WallKind, orientation};
use crate::error::WallError;

/// Infinite cylindrical wall of radius `radius` around the line through
/// `origin` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderWall {
    origin: DVec3,
    /// Unit length.
    axis: DVec3,
    radius: f64,
    inside: bool,
}

impl Default for CylinderWall {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            axis: DVec3::Z,
            radius: 0.0,
            inside: true,
        }
    }
}

impl CylinderWall {
    /// Builds a cylinder wall. `axis` is normalized here.
    pub fn new(radius: f64, origin: DVec3, axis: DVec3, inside: bool) -> Result<Self, WallError> {
        if !(radius >= 0.0) {
            return Err(WallError::NegativeRadius {
                kind: WallKind::Cylinder,
                radius,
            });
        }
        let axis = axis.try_normalize().ok_or(WallError::ZeroDirection {
            kind: WallKind::Cylinder,
            direction: "axis",
        })?;
        Ok(Self {
            origin,
            axis,
            radius,
            inside,
        })
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Wall for CylinderWall {
    const KIND: WallKind = WallKind::Cylinder;

    fn inside(&self) -> bool {
        self.inside
    }

    /// Only the component perpendicular to the axis matters. Points on the
    /// axis itself resolve toward `axis.any_orthonormal_vector()`.
    fn displacement(&self, point: DVec3) -> DVec3 {
        let shifted = point - self.origin;
        let radial = shifted - self.axis * shifted.dot(self.axis);
        let r = radial.length();
        let direction = if r > 0.0 {
            radial / r
        } else {
            self.axis.any_orthonormal_vector()
        };
        orientation(self.inside) * (self.radius - r).abs() * direction
    }
}
