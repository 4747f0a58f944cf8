use glam::DVec3;
use rayon::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::field::{MAX_CYLINDERS, MAX_PLANES, MAX_SPHERES, WallCollection};
use crate::core::math::virial::Virial;
use crate::error::WallError;
use crate::potentials::registry::PairEvaluator;
use crate::walls::{WallEvaluator, WallParams};

/// Read-only view of the particle data a force pass needs.
///
/// Structure-of-Arrays, borrowed from whatever owns the particles.
#[derive(Debug, Clone, Copy)]
pub struct ParticleView<'a> {
    pub positions: &'a [DVec3],
    /// Particle type index, used to pick the wall parameters.
    pub types: &'a [usize],
    pub diameters: Option<&'a [f64]>,
    pub charges: Option<&'a [f64]>,
}

impl<'a> ParticleView<'a> {
    pub fn new(positions: &'a [DVec3], types: &'a [usize]) -> Self {
        Self {
            positions,
            types,
            diameters: None,
            charges: None,
        }
    }

    pub fn with_diameters(mut self, diameters: &'a [f64]) -> Self {
        self.diameters = Some(diameters);
        self
    }

    pub fn with_charges(mut self, charges: &'a [f64]) -> Self {
        self.charges = Some(charges);
        self
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Per-particle force, energy and virial destination owned by the driver.
#[derive(Debug, Clone, Default)]
pub struct ForceBuffer {
    pub force: Vec<DVec3>,
    pub energy: Vec<f64>,
    pub virial: Vec<Virial>,
}

impl ForceBuffer {
    pub fn new(n: usize) -> Self {
        Self {
            force: vec![DVec3::ZERO; n],
            energy: vec![0.0; n],
            virial: vec![Virial::ZERO; n],
        }
    }

    pub fn len(&self) -> usize {
        self.force.len()
    }

    pub fn is_empty(&self) -> bool {
        self.force.is_empty()
    }

    pub fn zero(&mut self) {
        self.force.fill(DVec3::ZERO);
        self.energy.fill(0.0);
        self.virial.fill(Virial::ZERO);
    }

    pub fn total_energy(&self) -> f64 {
        self.energy.iter().sum()
    }

    pub fn total_force(&self) -> DVec3 {
        self.force.iter().copied().sum()
    }

    pub fn total_virial(&self) -> Virial {
        self.virial.iter().copied().sum()
    }
}

/// Applies a wall field to every particle of a system.
///
/// The active [`WallCollection`] is shared as an immutable snapshot. A new
/// configuration is installed by swapping in a whole new snapshot through
/// [`WallForceCompute::set_walls`], which needs `&mut self` and therefore
/// cannot overlap a running [`WallForceCompute::compute`].
///
/// Capacities follow the collection's and default to the same values.
pub struct WallForceCompute<
    E: PairEvaluator,
    const S: usize = MAX_SPHERES,
    const C: usize = MAX_CYLINDERS,
    const P: usize = MAX_PLANES,
> {
    walls: Arc<WallCollection<S, C, P>>,
    params: Vec<Option<WallParams<E::Params>>>,
    _evaluator: PhantomData<fn() -> E>,
}

impl<E: PairEvaluator, const S: usize, const C: usize, const P: usize> WallForceCompute<E, S, C, P> {
    pub fn new(walls: Arc<WallCollection<S, C, P>>, n_types: usize) -> Self {
        tracing::info!(
            target: "walls",
            potential = %Self::log_name(),
            walls = walls.len(),
            n_types,
            "wall force compute created"
        );
        Self {
            walls,
            params: vec![None; n_types],
            _evaluator: PhantomData,
        }
    }

    pub fn log_name() -> String {
        WallEvaluator::<E>::name()
    }

    /// Label of the summed energy in logs, e.g. `external_walls_lj_energy`.
    pub fn energy_log_name() -> String {
        format!("external_{}_energy", Self::log_name())
    }

    pub fn walls(&self) -> &Arc<WallCollection<S, C, P>> {
        &self.walls
    }

    /// Replaces the wall snapshot used by subsequent passes.
    pub fn set_walls(&mut self, walls: Arc<WallCollection<S, C, P>>) {
        tracing::info!(
            target: "walls",
            previous = self.walls.len(),
            current = walls.len(),
            "wall collection replaced"
        );
        self.walls = walls;
    }

    pub fn set_params(&mut self, type_id: usize, params: WallParams<E::Params>) -> Result<(), WallError> {
        let n_types = self.params.len();
        let slot = self
            .params
            .get_mut(type_id)
            .ok_or(WallError::UnknownParticleType { type_id, n_types })?;
        *slot = Some(params);
        Ok(())
    }

    pub fn params(&self, type_id: usize) -> Option<&WallParams<E::Params>> {
        self.params.get(type_id).and_then(Option::as_ref)
    }

    /// Evaluates all particles in parallel and adds the results into `out`.
    ///
    /// Every input is checked up front, so once evaluation starts it runs to
    /// completion.
    pub fn compute(&self, particles: &ParticleView<'_>, out: &mut ForceBuffer) -> Result<(), WallError> {
        let n = particles.len();
        for len in [particles.types.len(), out.force.len(), out.energy.len(), out.virial.len()]
            .into_iter()
            .chain(particles.diameters.map(<[f64]>::len))
            .chain(particles.charges.map(<[f64]>::len))
        {
            if len != n {
                return Err(WallError::BufferLength {
                    expected: n,
                    actual: len,
                });
            }
        }
        for &type_id in particles.types {
            match self.params.get(type_id) {
                None => {
                    return Err(WallError::UnknownParticleType {
                        type_id,
                        n_types: self.params.len(),
                    });
                }
                Some(None) => return Err(WallError::MissingParams(type_id)),
                Some(Some(_)) => {}
            }
        }

        let walls: &WallCollection<S, C, P> = &self.walls;
        out.force
            .par_iter_mut()
            .zip(out.energy.par_iter_mut())
            .zip(out.virial.par_iter_mut())
            .enumerate()
            .for_each(|(i, ((force, energy), virial))| {
                let Some(params) = self.params(particles.types[i]) else {
                    return;
                };
                let diameter = particles.diameters.map(|d| d[i]);
                let charge = particles.charges.map(|q| q[i]);
                let result =
                    WallEvaluator::<E>::evaluate(particles.positions[i], diameter, charge, walls, params);
                *force += result.force;
                *energy += result.energy;
                *virial += result.virial;
            });

        tracing::debug!(
            target: "walls",
            particles = n,
            walls = walls.len(),
            "wall force pass complete"
        );
        Ok(())
    }
}
