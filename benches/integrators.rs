//! Integrator benchmarks
//!
//! - Per-step cost of the RK4 pendulum step (includes joint refresh)
//! - Cost of the energy monitor
//! - Energy drift after a simulated minute for several time steps, reported
//!   as a duration (scaled by 1e9) so Criterion can plot it; lower is better

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use pendulum::physics::{self, MechanicalEnergy, Scalar};

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for &steps in &[1_usize, 10, 100, 1000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(
            BenchmarkId::new("runge_kutta_fourth_order", steps),
            &steps,
            |b, &steps| {
                let mut state = physics::initialize();
                b.iter(|| {
                    for _ in 0..steps {
                        physics::step(black_box(&mut state), black_box(physics::DEFAULT_TIME_STEP));
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_energy(c: &mut Criterion) {
    let mut state = physics::initialize();
    for _ in 0..1000 {
        physics::step(&mut state, physics::DEFAULT_TIME_STEP);
    }

    c.bench_function("energy", |b| {
        b.iter(|| MechanicalEnergy::of(black_box(&state)))
    });
}

fn energy_drift(dt: Scalar, duration: Scalar) -> Scalar {
    let mut state = physics::initialize();
    let initial = MechanicalEnergy::of(&state);
    let steps = (duration / dt).round() as usize;
    for _ in 0..steps {
        physics::step(&mut state, dt);
    }
    MechanicalEnergy::of(&state).drift_from(&initial)
}

fn benchmark_energy_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_drift");
    group.sample_size(10);

    for &dt in &[0.004, 0.002, 0.001, 0.0005] {
        group.bench_with_input(BenchmarkId::from_parameter(dt), &dt, |b, &dt| {
            b.iter_custom(|iters| {
                let drift = energy_drift(dt, 60.0);
                Duration::from_nanos(((drift * 1e9) as u64).saturating_mul(iters))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_step,
    benchmark_energy,
    benchmark_energy_drift
);
criterion_main!(benches);
