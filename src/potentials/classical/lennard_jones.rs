use crate::potentials::registry::{PairEvaluator, PairForce};

/// Lennard-Jones coefficients `lj1 = 4 eps sigma^12`, `lj2 = alpha 4 eps sigma^6`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LjParams {
    pub lj1: f64,
    pub lj2: f64,
}

impl LjParams {
    pub fn new(epsilon: f64, sigma: f64, alpha: f64) -> Self {
        let sigma6 = sigma.powi(6);
        Self {
            lj1: 4.0 * epsilon * sigma6 * sigma6,
            lj2: alpha * 4.0 * epsilon * sigma6,
        }
    }
}

/// Lennard-Jones: V = 4 eps [ (sigma/r)^12 - alpha (sigma/r)^6 ]
#[derive(Debug, Clone, Copy)]
pub struct LennardJones {
    rsq: f64,
    rcutsq: f64,
    params: LjParams,
}

impl PairEvaluator for LennardJones {
    type Params = LjParams;

    fn name() -> &'static str {
        "lj"
    }

    fn new(rsq: f64, rcutsq: f64, params: &LjParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let LjParams { lj1, lj2 } = self.params;
        if self.rsq >= self.rcutsq || lj1 == 0.0 {
            return None;
        }

        let r2inv = 1.0 / self.rsq;
        let r6inv = r2inv * r2inv * r2inv;
        let force_divr = r2inv * r6inv * (12.0 * lj1 * r6inv - 6.0 * lj2);
        let mut energy = r6inv * (lj1 * r6inv - lj2);

        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            let rcut6inv = rcut2inv * rcut2inv * rcut2inv;
            energy -= rcut6inv * (lj1 * rcut6inv - lj2);
        }

        Some(PairForce { force_divr, energy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_sits_at_two_to_the_sixth() {
        let params = LjParams::new(1.0, 1.0, 1.0);
        let rmin = 2.0_f64.powf(1.0 / 6.0);
        let pair = LennardJones::new(rmin * rmin, 9.0, &params)
            .eval_force_and_energy(false)
            .unwrap();
        assert!(pair.force_divr.abs() < 1e-12);
        assert!((pair.energy + 1.0).abs() < 1e-12);
    }

    #[test]
    fn beyond_cutoff_is_not_evaluated() {
        let params = LjParams::new(1.0, 1.0, 1.0);
        assert!(LennardJones::new(9.0, 9.0, &params).eval_force_and_energy(true).is_none());
    }
}
