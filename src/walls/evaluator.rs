use glam::DVec3;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign};

use super::params::WallParams;
use crate::core::field::WallCollection;
use crate::core::geometry::Wall;
use crate::core::math::virial::Virial;
use crate::potentials::registry::{PairEvaluator, PairForce};

/// Walls have no reciprocal partner to absorb a jump at the cutoff, so the
/// pair energy is always shifted to zero there.
const ENERGY_SHIFT: bool = true;

/// Force, energy and virial that a set of walls exerts on one particle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallForce {
    pub force: DVec3,
    pub energy: f64,
    pub virial: Virial,
}

impl WallForce {
    pub const ZERO: Self = Self {
        force: DVec3::ZERO,
        energy: 0.0,
        virial: Virial::ZERO,
    };

    /// Adds one wall's contribution. Nothing is halved: the wall is not a
    /// dynamical body and never receives the reaction.
    #[inline]
    pub fn add_pair(&mut self, dx: DVec3, pair: PairForce) {
        self.force += dx * pair.force_divr;
        self.energy += pair.energy;
        self.virial += Virial::from_pair(dx, pair.force_divr);
    }

    /// Adds this result into caller-owned accumulators without resetting them.
    pub fn add_into(&self, force: &mut DVec3, energy: &mut f64, virial: &mut [f64; 6]) {
        *force += self.force;
        *energy += self.energy;
        for (dst, src) in virial.iter_mut().zip(self.virial.0) {
            *dst += src;
        }
    }
}

impl Add for WallForce {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for WallForce {
    fn add_assign(&mut self, rhs: Self) {
        self.force += rhs.force;
        self.energy += rhs.energy;
        self.virial += rhs.virial;
    }
}

/// External-field evaluator applying pair potential `E` between a particle
/// and every wall of a [`WallCollection`].
///
/// Each wall is treated as a partner particle sitting at the nearest point of
/// its surface, with zero diameter and zero charge.
pub struct WallEvaluator<E> {
    _evaluator: PhantomData<fn() -> E>,
}

impl<E: PairEvaluator> WallEvaluator<E> {
    /// Name energies are logged under, e.g. `walls_lj`.
    pub fn name() -> String {
        format!("walls_{}", E::name())
    }

    pub fn needs_diameter() -> bool {
        E::needs_diameter()
    }

    pub fn needs_charge() -> bool {
        E::needs_charge()
    }

    /// Sums the force, energy and virial of all walls acting on a particle at
    /// `position`. Spheres are visited first, then cylinders, then planes.
    ///
    /// A missing diameter or charge counts as zero; they are only read when
    /// `E` asks for them.
    pub fn evaluate<const S: usize, const C: usize, const P: usize>(
        position: DVec3,
        diameter: Option<f64>,
        charge: Option<f64>,
        walls: &WallCollection<S, C, P>,
        params: &WallParams<E::Params>,
    ) -> WallForce {
        let particle = Particle {
            position,
            diameter: diameter.unwrap_or(0.0),
            charge: charge.unwrap_or(0.0),
        };

        let mut out = WallForce::ZERO;
        accumulate::<E, _>(walls.spheres(), &particle, params, &mut out);
        accumulate::<E, _>(walls.cylinders(), &particle, params, &mut out);
        accumulate::<E, _>(walls.planes(), &particle, params, &mut out);
        out
    }

    /// Contribution of a single wall, or `None` if it is skipped by the
    /// minimum distance or lies beyond the cutoff.
    pub fn evaluate_wall<W: Wall>(
        wall: &W,
        position: DVec3,
        diameter: Option<f64>,
        charge: Option<f64>,
        params: &WallParams<E::Params>,
    ) -> Option<(DVec3, PairForce)> {
        let particle = Particle {
            position,
            diameter: diameter.unwrap_or(0.0),
            charge: charge.unwrap_or(0.0),
        };
        pair_with_wall::<E, W>(wall, &particle, params)
    }
}

struct Particle {
    position: DVec3,
    diameter: f64,
    charge: f64,
}

fn accumulate<E: PairEvaluator, W: Wall>(
    walls: &[W],
    particle: &Particle,
    params: &WallParams<E::Params>,
    out: &mut WallForce,
) {
    for wall in walls {
        if let Some((dx, pair)) = pair_with_wall::<E, W>(wall, particle, params) {
            out.add_pair(dx, pair);
        }
    }
}

#[inline]
fn pair_with_wall<E: PairEvaluator, W: Wall>(
    wall: &W,
    particle: &Particle,
    params: &WallParams<E::Params>,
) -> Option<(DVec3, PairForce)> {
    let dx = wall.separation(particle.position);
    let rsq = dx.length_squared();
    if rsq < params.rminsq {
        return None;
    }

    let mut eval = E::new(rsq, params.rcutsq, &params.params);
    if E::needs_diameter() {
        eval.set_diameter(particle.diameter, 0.0);
    }
    if E::needs_charge() {
        eval.set_charge(particle.charge, 0.0);
    }

    eval.eval_force_and_energy(ENERGY_SHIFT).map(|pair| (dx, pair))
}
