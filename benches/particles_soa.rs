use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use particle_layout::soa::ParticleSystem;
use std::hint::black_box;

use bench_setup::{COUNTS, DT, GRAVITY};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build-soa");
    for &count in COUNTS.iter() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| ParticleSystem::new(black_box(count)))
        });
    }
    group.finish();
}

fn bench_update_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("update-positions-soa");
    for &count in COUNTS.iter() {
        let mut system = ParticleSystem::new(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                system.update_positions(black_box(DT));
                black_box(system.positions().as_ptr());
            })
        });
    }
    group.finish();
}

fn bench_kinetic_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetic-energy-soa");
    for &count in COUNTS.iter() {
        let system = ParticleSystem::new(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| black_box(black_box(&system).compute_kinetic_energy()))
        });
    }
    group.finish();
}

fn bench_apply_gravity(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply-gravity-soa");
    for &count in COUNTS.iter() {
        let mut system = ParticleSystem::new(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                system.apply_gravity(black_box(GRAVITY), black_box(DT));
                black_box(system.velocities().as_ptr());
            })
        });
    }
    group.finish();
}

fn bench_full_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("full-update-soa");
    for &count in COUNTS.iter() {
        let mut system = ParticleSystem::new(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                let energy = system.update(black_box(GRAVITY), black_box(DT));
                black_box(system.positions().as_ptr());
                energy
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_update_positions,
    bench_kinetic_energy,
    bench_apply_gravity,
    bench_full_update
);
criterion_main!(benches);
