use crate::compute::ForceBuffer;

/// A synchronous probe that extracts a scalar from the result of a force pass.
pub trait Probe {
    fn name(&self) -> &str;
    fn measure(&self, forces: &ForceBuffer) -> f64;
}

/// Total potential energy the walls contribute.
pub struct WallEnergyProbe;

impl Probe for WallEnergyProbe {
    fn name(&self) -> &str {
        "Wall Energy"
    }

    fn measure(&self, forces: &ForceBuffer) -> f64 {
        forces.total_energy()
    }
}

/// Virial part of the isotropic pressure due to the walls:
/// P_w = Tr(W) / (3 V)
pub struct WallPressureProbe {
    pub volume: f64,
}

impl WallPressureProbe {
    pub fn new(volume: f64) -> Self {
        Self { volume }
    }
}

impl Probe for WallPressureProbe {
    fn name(&self) -> &str {
        "Wall Pressure"
    }

    fn measure(&self, forces: &ForceBuffer) -> f64 {
        if self.volume <= 0.0 {
            return 0.0;
        }
        forces.total_virial().trace() / (3.0 * self.volume)
    }
}
