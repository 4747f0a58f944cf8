use crate::potentials::registry::{PairEvaluator, PairForce};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YukawaParams {
    pub epsilon: f64,
    pub kappa: f64,
}

/// Screened Coulomb (Yukawa): V = eps exp(-kappa r) / r
#[derive(Debug, Clone, Copy)]
pub struct Yukawa {
    rsq: f64,
    rcutsq: f64,
    params: YukawaParams,
}

impl PairEvaluator for Yukawa {
    type Params = YukawaParams;

    fn name() -> &'static str {
        "yukawa"
    }

    fn new(rsq: f64, rcutsq: f64, params: &YukawaParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let YukawaParams { epsilon, kappa } = self.params;
        if self.rsq >= self.rcutsq || epsilon == 0.0 {
            return None;
        }

        let r = self.rsq.sqrt();
        let rinv = 1.0 / r;
        let screened = epsilon * (-kappa * r).exp();

        let force_divr = screened * (rinv + kappa) / self.rsq;
        let mut energy = screened * rinv;

        if energy_shift {
            let rcut = self.rcutsq.sqrt();
            energy -= epsilon * (-kappa * rcut).exp() / rcut;
        }

        Some(PairForce { force_divr, energy })
    }
}
