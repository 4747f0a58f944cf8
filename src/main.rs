use anyhow::{Context, Result};
use glam::DVec3;
use std::sync::Arc;

use wallfield::compute::{ForceBuffer, ParticleView, WallForceCompute};
use wallfield::config::{PotentialConfig, WallsConfig};
use wallfield::core::field::{PackedWalls, WallCollection};
use wallfield::investigation::probe::{Probe, WallEnergyProbe};
use wallfield::potentials::classical::{LennardJones, Moliere, ShiftedLennardJones, Yukawa};
use wallfield::potentials::registry::PairEvaluator;
use wallfield::walls::WallParams;

/// Number of probe points along the scan line.
const SCAN_POINTS: usize = 41;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => WallsConfig::load(&path)?,
        None => WallsConfig::default(),
    };
    let walls = Arc::new(config.build_walls().context("building wall collection")?);
    let packed = PackedWalls::from_collection(&*walls);
    tracing::debug!(target: "walls", bytes = packed.to_bytes().len(), "packed wall image");

    println!("--- wallfield ---");
    println!(
        "{} spheres, {} cylinders, {} planes, r_cut = {}",
        walls.spheres().len(),
        walls.cylinders().len(),
        walls.planes().len(),
        config.r_cut
    );

    let potential = &config.potential;
    match potential {
        PotentialConfig::LennardJones { .. } => {
            let params = potential.lj_params().context("lj parameters")?;
            scan::<LennardJones>(walls, config.wall_params(params))
        }
        PotentialConfig::ShiftedLennardJones { .. } => {
            let params = potential.lj_params().context("slj parameters")?;
            scan::<ShiftedLennardJones>(walls, config.wall_params(params))
        }
        PotentialConfig::Yukawa { .. } => {
            let params = potential.yukawa_params().context("yukawa parameters")?;
            scan::<Yukawa>(walls, config.wall_params(params))
        }
        PotentialConfig::Moliere { .. } => {
            let params = potential.moliere_params().context("moliere parameters")?;
            scan::<Moliere>(walls, config.wall_params(params))
        }
    }
}

/// Places unit-diameter probe particles along the x axis, across the extent
/// of the walls, and prints what each one feels.
fn scan<E: PairEvaluator>(walls: Arc<WallCollection>, params: WallParams<E::Params>) -> Result<()> {
    let extent = walls
        .spheres()
        .iter()
        .map(|s| s.origin().x.abs() + s.radius())
        .chain(walls.cylinders().iter().map(|c| c.origin().x.abs() + c.radius()))
        .fold(1.0_f64, f64::max);

    let positions: Vec<DVec3> = (0..SCAN_POINTS)
        .map(|i| {
            let t = i as f64 / (SCAN_POINTS - 1) as f64;
            DVec3::new(-extent + 2.0 * extent * t, 0.0, 0.0)
        })
        .collect();
    let types = vec![0; positions.len()];
    let diameters = vec![1.0; positions.len()];

    let mut compute = WallForceCompute::<E>::new(walls, 1);
    compute.set_params(0, params)?;

    let particles = ParticleView::new(&positions, &types).with_diameters(&diameters);
    let mut forces = ForceBuffer::new(positions.len());
    compute.compute(&particles, &mut forces)?;

    println!("{:>10} {:>14} {:>14}", "x", "energy", "f_x");
    for (pos, (energy, force)) in positions.iter().zip(forces.energy.iter().zip(&forces.force)) {
        println!("{:>10.4} {:>14.6e} {:>14.6e}", pos.x, energy, force.x);
    }

    let probe = WallEnergyProbe;
    println!(
        "{} ({}): {:.6e}",
        probe.name(),
        WallForceCompute::<E>::energy_log_name(),
        probe.measure(&forces)
    );
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
