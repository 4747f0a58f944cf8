use super::lennard_jones::LjParams;
use crate::potentials::registry::{PairEvaluator, PairForce};

/// Lennard-Jones shifted outward by the particle size:
/// V = 4 eps [ (sigma/(r - Delta))^12 - alpha (sigma/(r - Delta))^6 ],
/// with `Delta = (d_i + d_j)/2 - 1`.
///
/// The cutoff moves with the shift, so the pair is evaluated out to
/// `r_cut + Delta`.
#[derive(Debug, Clone, Copy)]
pub struct ShiftedLennardJones {
    rsq: f64,
    rcutsq: f64,
    params: LjParams,
    delta: f64,
}

impl PairEvaluator for ShiftedLennardJones {
    type Params = LjParams;

    fn name() -> &'static str {
        "slj"
    }

    fn new(rsq: f64, rcutsq: f64, params: &LjParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
            delta: 0.0,
        }
    }

    fn needs_diameter() -> bool {
        true
    }

    fn set_diameter(&mut self, di: f64, dj: f64) {
        self.delta = (di + dj) / 2.0 - 1.0;
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let LjParams { lj1, lj2 } = self.params;
        let r = self.rsq.sqrt();
        let rcut = self.rcutsq.sqrt();
        if r >= rcut + self.delta || lj1 == 0.0 {
            return None;
        }

        let rmd = r - self.delta;
        let rmdinv = 1.0 / rmd;
        let rmd2inv = rmdinv * rmdinv;
        let rmd6inv = rmd2inv * rmd2inv * rmd2inv;

        let force_divr = rmdinv * rmd6inv * (12.0 * lj1 * rmd6inv - 6.0 * lj2) / r;
        let mut energy = rmd6inv * (lj1 * rmd6inv - lj2);

        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            let rcut6inv = rcut2inv * rcut2inv * rcut2inv;
            energy -= rcut6inv * (lj1 * rcut6inv - lj2);
        }

        Some(PairForce { force_divr, energy })
    }
}
