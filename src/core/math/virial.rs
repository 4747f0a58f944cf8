use glam::{DMat3, DVec3};
use std::ops::{Add, AddAssign, Index};

/// Symmetric 3x3 virial tensor stored as its six independent components,
/// in the order `xx, xy, xz, yy, yz, zz`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Virial(pub [f64; 6]);

impl Virial {
    pub const ZERO: Self = Self([0.0; 6]);

    pub const fn new(components: [f64; 6]) -> Self {
        Self(components)
    }

    /// Pairwise contribution `f/r * (dx ⊗ dx)`.
    #[inline]
    pub fn from_pair(dx: DVec3, force_divr: f64) -> Self {
        Self([
            force_divr * dx.x * dx.x,
            force_divr * dx.x * dx.y,
            force_divr * dx.x * dx.z,
            force_divr * dx.y * dx.y,
            force_divr * dx.y * dx.z,
            force_divr * dx.z * dx.z,
        ])
    }

    pub fn xx(&self) -> f64 {
        self.0[0]
    }

    pub fn yy(&self) -> f64 {
        self.0[3]
    }

    pub fn zz(&self) -> f64 {
        self.0[5]
    }

    pub fn trace(&self) -> f64 {
        self.xx() + self.yy() + self.zz()
    }

    /// Expands to the full symmetric matrix.
    pub fn to_mat3(&self) -> DMat3 {
        let [xx, xy, xz, yy, yz, zz] = self.0;
        DMat3::from_cols(
            DVec3::new(xx, xy, xz),
            DVec3::new(xy, yy, yz),
            DVec3::new(xz, yz, zz),
        )
    }
}

impl Add for Virial {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Virial {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Index<usize> for Virial {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl std::iter::Sum for Virial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
