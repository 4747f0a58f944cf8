use std::fmt::Debug;

/// Result of a single pair evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairForce {
    /// Magnitude of the force divided by the separation, `-(dV/dr) / r`.
    pub force_divr: f64,
    /// Pair energy `V(r)`.
    pub energy: f64,
}

/// A pairwise potential evaluated for one separation at a time.
///
/// An evaluator is constructed for every pair from the squared separation,
/// the squared cutoff and the potential's parameter payload, optionally fed
/// the diameters and charges of the two particles, and then asked for the
/// force and energy. Implementations are plain values so that callers
/// generic over `E: PairEvaluator` monomorphize to straight-line code.
pub trait PairEvaluator: Sized {
    /// Per type-pair parameters of the potential.
    type Params: Copy + Debug + Send + Sync;

    /// Short, lowercase name used to label logged quantities.
    fn name() -> &'static str;

    /// Builds the evaluator for squared separation `rsq` and squared cutoff `rcutsq`.
    fn new(rsq: f64, rcutsq: f64, params: &Self::Params) -> Self;

    /// Whether [`PairEvaluator::set_diameter`] must be called before evaluating.
    fn needs_diameter() -> bool {
        false
    }

    /// Accepts the diameters of particles `i` and `j`.
    fn set_diameter(&mut self, _di: f64, _dj: f64) {}

    /// Whether [`PairEvaluator::set_charge`] must be called before evaluating.
    fn needs_charge() -> bool {
        false
    }

    /// Accepts the charges of particles `i` and `j`.
    fn set_charge(&mut self, _qi: f64, _qj: f64) {}

    /// Evaluates the force and energy.
    ///
    /// With `energy_shift` set the energy is shifted so that `V(r_cut) = 0`.
    /// Returns `None` when the pair lies outside the cutoff (or the potential
    /// is switched off), in which case nothing should be accumulated.
    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce>;
}
