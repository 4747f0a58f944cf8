//! RON description of a wall field and the pair potential it applies.
//!
//! ```ron
//! (
//!     spheres: [(r: 5.0, origin: (0.0, 0.0, 0.0), inside: true)],
//!     planes: [(origin: (0.0, 0.0, -4.0), normal: (0.0, 0.0, 1.0))],
//!     potential: LennardJones(epsilon: 1.0, sigma: 1.0),
//!     r_cut: 2.5,
//! )
//! ```

use anyhow::Context;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::field::{WallCollection, WallGroup};
use crate::core::geometry::{CylinderWall, PlaneWall, SphereWall};
use crate::error::WallError;
use crate::potentials::classical::{LjParams, MoliereParams, YukawaParams};
use crate::walls::WallParams;

fn default_inside() -> bool {
    true
}

fn default_alpha() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereSpec {
    pub r: f64,
    pub origin: [f64; 3],
    #[serde(default = "default_inside")]
    pub inside: bool,
}

impl SphereSpec {
    pub fn to_wall(&self) -> Result<SphereWall, WallError> {
        SphereWall::new(self.r, DVec3::from_array(self.origin), self.inside)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    pub r: f64,
    pub origin: [f64; 3],
    pub axis: [f64; 3],
    #[serde(default = "default_inside")]
    pub inside: bool,
}

impl CylinderSpec {
    pub fn to_wall(&self) -> Result<CylinderWall, WallError> {
        CylinderWall::new(
            self.r,
            DVec3::from_array(self.origin),
            DVec3::from_array(self.axis),
            self.inside,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSpec {
    pub origin: [f64; 3],
    pub normal: [f64; 3],
    #[serde(default = "default_inside")]
    pub inside: bool,
}

impl PlaneSpec {
    pub fn to_wall(&self) -> Result<PlaneWall, WallError> {
        PlaneWall::new(
            DVec3::from_array(self.origin),
            DVec3::from_array(self.normal),
            self.inside,
        )
    }
}

/// Which pair potential the walls apply, with its physical parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PotentialConfig {
    LennardJones {
        epsilon: f64,
        sigma: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    ShiftedLennardJones {
        epsilon: f64,
        sigma: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    Yukawa {
        epsilon: f64,
        kappa: f64,
    },
    Moliere {
        z_i: f64,
        z_j: f64,
        a_0: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallsConfig {
    #[serde(default)]
    pub spheres: Vec<SphereSpec>,
    #[serde(default)]
    pub cylinders: Vec<CylinderSpec>,
    #[serde(default)]
    pub planes: Vec<PlaneSpec>,
    pub potential: PotentialConfig,
    /// Cutoff distance (not squared).
    pub r_cut: f64,
    /// Minimum distance (not squared).
    #[serde(default)]
    pub r_min: f64,
}

impl Default for WallsConfig {
    /// A spherical droplet resting on a floor, with a WCA-like repulsion.
    fn default() -> Self {
        Self {
            spheres: vec![SphereSpec {
                r: 5.0,
                origin: [0.0, 0.0, 0.0],
                inside: true,
            }],
            cylinders: Vec::new(),
            planes: vec![PlaneSpec {
                origin: [0.0, 0.0, -4.0],
                normal: [0.0, 0.0, 1.0],
                inside: true,
            }],
            potential: PotentialConfig::LennardJones {
                epsilon: 1.0,
                sigma: 1.0,
                alpha: 1.0,
            },
            r_cut: 2.0_f64.powf(1.0 / 6.0),
            // Keeps particles sitting on a surface from evaluating LJ at r = 0.
            r_min: 0.1,
        }
    }
}

impl WallsConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, WallError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading wall configuration {}", path.display()))?;
        let config = Self::from_ron_str(&text)
            .with_context(|| format!("parsing wall configuration {}", path.display()))?;
        tracing::info!(target: "walls", path = %path.display(), "wall configuration loaded");
        Ok(config)
    }

    pub fn to_ron_string(&self) -> anyhow::Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Converts every raw descriptor into a geometry instance.
    pub fn wall_group(&self) -> Result<WallGroup, WallError> {
        Ok(WallGroup {
            spheres: self
                .spheres
                .iter()
                .map(SphereSpec::to_wall)
                .collect::<Result<_, _>>()?,
            cylinders: self
                .cylinders
                .iter()
                .map(CylinderSpec::to_wall)
                .collect::<Result<_, _>>()?,
            planes: self
                .planes
                .iter()
                .map(PlaneSpec::to_wall)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn build_walls(&self) -> Result<WallCollection, WallError> {
        self.wall_group()?.build()
    }

    pub fn rcutsq(&self) -> f64 {
        self.r_cut * self.r_cut
    }

    pub fn rminsq(&self) -> f64 {
        self.r_min * self.r_min
    }

    /// Bundles `params` with this configuration's distance window.
    pub fn wall_params<P>(&self, params: P) -> WallParams<P> {
        WallParams::from_distances(params, self.r_cut, self.r_min)
    }
}

impl PotentialConfig {
    pub fn lj_params(&self) -> Option<LjParams> {
        match *self {
            Self::LennardJones {
                epsilon,
                sigma,
                alpha,
            }
            | Self::ShiftedLennardJones {
                epsilon,
                sigma,
                alpha,
            } => Some(LjParams::new(epsilon, sigma, alpha)),
            _ => None,
        }
    }

    pub fn yukawa_params(&self) -> Option<YukawaParams> {
        match *self {
            Self::Yukawa { epsilon, kappa } => Some(YukawaParams { epsilon, kappa }),
            _ => None,
        }
    }

    pub fn moliere_params(&self) -> Option<MoliereParams> {
        match *self {
            Self::Moliere { z_i, z_j, a_0 } => Some(MoliereParams::from_atomic_numbers(z_i, z_j, a_0)),
            _ => None,
        }
    }
}
