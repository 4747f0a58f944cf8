/// Pair-potential parameters plus the distance window in which a wall acts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallParams<P> {
    /// Payload handed to the pair evaluator.
    pub params: P,
    /// Squared cutoff; separations at or beyond it feel nothing.
    pub rcutsq: f64,
    /// Squared minimum; separations below it are skipped outright.
    pub rminsq: f64,
}

impl<P> WallParams<P> {
    pub fn new(params: P, rcutsq: f64, rminsq: f64) -> Self {
        Self {
            params,
            rcutsq,
            rminsq,
        }
    }

    /// Same as [`WallParams::new`] but from linear distances.
    pub fn from_distances(params: P, r_cut: f64, r_min: f64) -> Self {
        Self::new(params, r_cut * r_cut, r_min * r_min)
    }
}

/// Bundles `params` with the squared cutoff and minimum distances.
///
/// No validation is done; physical sensibility is up to the caller.
pub fn make_wall_params<P>(params: P, rcutsq: f64, rminsq: f64) -> WallParams<P> {
    WallParams::new(params, rcutsq, rminsq)
}
