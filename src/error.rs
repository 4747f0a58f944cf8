use thiserror::Error;

use crate::core::geometry::WallKind;

/// Configuration failures raised while building a wall field.
///
/// Evaluation itself never fails: every one of these is reported before a
/// force pass begins.
#[derive(Error, Debug)]
pub enum WallError {
    /// More walls of one kind than the collection can hold.
    #[error("{count} {kind} walls requested but at most {capacity} are supported")]
    CapacityExceeded {
        kind: WallKind,
        count: usize,
        capacity: usize,
    },

    #[error("{kind} wall radius must be non-negative, got {radius}")]
    NegativeRadius { kind: WallKind, radius: f64 },

    /// Axis or normal given with zero (or non-finite) length.
    #[error("{kind} wall {direction} vector cannot be normalized")]
    ZeroDirection {
        kind: WallKind,
        direction: &'static str,
    },

    #[error("particle type {type_id} is out of range (only {n_types} types configured)")]
    UnknownParticleType { type_id: usize, n_types: usize },

    #[error("no wall parameters set for particle type {0}")]
    MissingParams(usize),

    #[error("force buffer holds {actual} particles but {expected} were supplied")]
    BufferLength { expected: usize, actual: usize },

    #[error("failed to parse wall configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
