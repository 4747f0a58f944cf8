use crate::potentials::registry::{PairEvaluator, PairForce};

/// Width of the smoothing shell inside the cutoff.
const SHELL_WIDTH: f64 = 0.2;

/// Screening-function coefficients `(c_k, b_k)`: `sum_k c_k exp(-b_k r / aF)`.
const SCREENING: [(f64, f64); 3] = [(0.35, 0.3), (0.55, 1.2), (0.10, 6.0)];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoliereParams {
    /// `Z_i Z_j e^2 / (4 pi eps0)` in simulation units.
    pub zsq: f64,
    /// Firsov screening length.
    pub a_f: f64,
}

impl MoliereParams {
    pub fn new(zsq: f64, a_f: f64) -> Self {
        Self { zsq, a_f }
    }

    /// Derives the parameters from atomic numbers, with `e^2 / (4 pi eps0) = 1`
    /// and `aF = 0.8853 a0 / (sqrt(Z_i) + sqrt(Z_j))^(2/3)`.
    pub fn from_atomic_numbers(z_i: f64, z_j: f64, a_0: f64) -> Self {
        let a_f = 0.8853 * a_0 / (z_i.sqrt() + z_j.sqrt()).powf(2.0 / 3.0);
        Self {
            zsq: z_i * z_j,
            a_f,
        }
    }
}

/// Moliere screened-Coulomb potential:
/// V = Zsq / r [ 0.35 exp(-0.3 r/aF) + 0.55 exp(-1.2 r/aF) + 0.10 exp(-6.0 r/aF) ]
///
/// Within `SHELL_WIDTH` of the cutoff the energy and force are multiplied by a
/// smooth switching function that reaches zero at `r_cut`.
#[derive(Debug, Clone, Copy)]
pub struct Moliere {
    rsq: f64,
    rcutsq: f64,
    params: MoliereParams,
}

impl Moliere {
    fn screening(&self, r: f64) -> (f64, f64) {
        let a_f = self.params.a_f;
        SCREENING
            .iter()
            .fold((0.0, 0.0), |(phi, dphi), &(c, b)| {
                let term = c * (-b * r / a_f).exp();
                (phi + term, dphi + b * term / a_f)
            })
    }

    /// Switching function and its derivative with respect to `r`.
    fn switch(r: f64, rcut: f64) -> (f64, f64) {
        let inner = rcut - SHELL_WIDTH;
        if r <= inner {
            return (1.0, 0.0);
        }
        let x = (r - inner) / SHELL_WIDTH;
        let x2 = x * x;
        let x3 = x2 * x;
        let inv_denom = 1.0 / (x3 - 1.0);
        let f = (3.0 * x3 * inv_denom).exp();
        let df = -9.0 * x2 * inv_denom * inv_denom / SHELL_WIDTH * f;
        (f, df)
    }
}

impl PairEvaluator for Moliere {
    type Params = MoliereParams;

    fn name() -> &'static str {
        "moliere"
    }

    fn new(rsq: f64, rcutsq: f64, params: &MoliereParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let MoliereParams { zsq, a_f } = self.params;
        if self.rsq >= self.rcutsq || zsq == 0.0 || a_f == 0.0 {
            return None;
        }

        let r = self.rsq.sqrt();
        let rinv = 1.0 / r;
        let rcut = self.rcutsq.sqrt();

        let (phi, dphi) = self.screening(r);
        let mut force_divr = zsq * (rinv * phi + dphi) / self.rsq;
        let mut energy = zsq * rinv * phi;

        if energy_shift {
            let (phi_cut, _) = self.screening(rcut);
            energy -= zsq * phi_cut / rcut;
        }

        let (f, df) = Self::switch(r, rcut);
        force_divr = force_divr * f - rinv * df * energy;
        energy *= f;

        Some(PairForce { force_divr, energy })
    }
}
