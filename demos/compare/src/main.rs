mod cli;

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::Parser;
use log::{error, info};
use particle_layout::{aos, soa, Simulation, Vec3};

use cli::{Args, Op};

/// Call `op` on `system` `iterations` times, returning the total elapsed time
/// and the energy seen on the last call, if the operation produces one.
fn time_op<S: Simulation>(
    system: &mut S,
    op: Op,
    iterations: u32,
    gravity: Vec3,
    dt: f32,
) -> (Duration, Option<f32>) {
    let mut energy = None;
    let start = Instant::now();
    for _ in 0..iterations {
        match op {
            Op::UpdatePositions => system.update_positions(black_box(dt)),
            Op::KineticEnergy => energy = Some(black_box(system.compute_kinetic_energy())),
            Op::ApplyGravity => system.apply_gravity(black_box(gravity), black_box(dt)),
            Op::Update => {
                let e = system.update(black_box(gravity), black_box(dt));
                energy = Some(black_box(e));
            }
            Op::All => unreachable!("`All` is expanded before timing"),
        }
        black_box(&mut *system);
    }
    (start.elapsed(), energy)
}

fn per_call(total: Duration, iterations: u32) -> Duration {
    total / iterations.max(1)
}

/// First particle index at which the two systems differ in any bit.
fn first_mismatch<A: Simulation, B: Simulation>(a: &A, b: &B) -> Option<usize> {
    let bits = |v: Vec3| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()];
    (0..a.len()).find(|&i| {
        bits(a.position(i)) != bits(b.position(i))
            || bits(a.velocity(i)) != bits(b.velocity(i))
            || a.mass(i).to_bits() != b.mass(i).to_bits()
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let gravity = Vec3::new(0.0, -args.gravity, 0.0);

    let mut aos_system = aos::ParticleSystem::try_new(args.particles)?;
    let mut soa_system = soa::ParticleSystem::try_new(args.particles)?;
    info!(
        "{} particles: {} holds {} bytes, {} holds {} bytes",
        args.particles,
        aos::ParticleSystem::LAYOUT,
        aos_system.storage_bytes(),
        soa::ParticleSystem::LAYOUT,
        soa_system.storage_bytes(),
    );

    for &op in args.op.expand() {
        let (aos_time, aos_energy) =
            time_op(&mut aos_system, op, args.iterations, gravity, args.dt);
        let (soa_time, soa_energy) =
            time_op(&mut soa_system, op, args.iterations, gravity, args.dt);
        let aos_call = per_call(aos_time, args.iterations);
        let soa_call = per_call(soa_time, args.iterations);
        let ratio = aos_call.as_secs_f64() / soa_call.as_secs_f64().max(f64::MIN_POSITIVE);
        info!(
            "{:<24} aos {:>12?}/call  soa {:>12?}/call  aos/soa {:.2}x",
            op.name(),
            aos_call,
            soa_call,
            ratio
        );
        if aos_energy.map(f32::to_bits) != soa_energy.map(f32::to_bits) {
            error!(
                "{}: energy differs, aos {:?} soa {:?}",
                op.name(),
                aos_energy,
                soa_energy
            );
            bail!("layouts disagree on kinetic energy");
        }
    }

    if let Some(index) = first_mismatch(&aos_system, &soa_system) {
        error!(
            "particle {} differs: aos {:?} / {:?}, soa {:?} / {:?}",
            index,
            aos_system.position(index),
            aos_system.velocity(index),
            soa_system.position(index),
            soa_system.velocity(index),
        );
        bail!("layouts disagree on particle state");
    }
    info!(
        "final state identical, kinetic energy {}",
        aos_system.compute_kinetic_energy()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_runs_agree() {
        let gravity = Vec3::new(0.0, -9.81, 0.0);
        let mut a = aos::ParticleSystem::new(50);
        let mut s = soa::ParticleSystem::new(50);
        for &op in Op::All.expand() {
            let (_, ea) = time_op(&mut a, op, 3, gravity, 0.016);
            let (_, es) = time_op(&mut s, op, 3, gravity, 0.016);
            assert_eq!(ea, es);
        }
        assert_eq!(first_mismatch(&a, &s), None);
    }

    #[test]
    fn mismatch_is_found() {
        let a = aos::ParticleSystem::new(4);
        let mut s = soa::ParticleSystem::new(4);
        s.update_positions(1.0);
        // particle 0 has zero velocity and does not move
        assert_eq!(first_mismatch(&a, &s), Some(1));
    }

    #[test]
    fn zero_iterations() {
        assert_eq!(per_call(Duration::from_secs(1), 0), Duration::from_secs(1));
    }
}
