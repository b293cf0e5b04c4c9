use std::time::Instant;

use crate::simulation::clock::SimulationClock;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyRegistry, NVec3};

/// Sun at the origin plus `n - 1` planets on a deterministic spiral
fn ring_registry(n: usize) -> BodyRegistry {
    let mut registry = BodyRegistry::new();
    if n == 0 {
        return registry;
    }

    registry
        .create(332_937.0, NVec3::zeros(), NVec3::zeros())
        .expect("positive mass");
    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let radius = 0.5 + 0.05 * i_f;
        let angle = i_f * 0.37;
        let x = NVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
        // roughly circular: |v| = 2 pi / sqrt(r)
        let speed = std::f64::consts::TAU / radius.sqrt();
        let v = NVec3::new(-angle.sin() * speed, angle.cos() * speed, 0.0);
        registry.create(1.0, x, v).expect("positive mass");
    }
    registry
}

/// Time one `advance` for growing body counts.
/// The direct sum is O(n^2), so doubling n should roughly quadruple the cost.
pub fn bench_advance() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 20;

    for n in ns {
        let mut scenario = Scenario::new(ring_registry(n), Parameters::default(), SimulationClock::default());

        // Warm up
        if let Err(e) = scenario.advance(1.0 / 60.0) {
            println!("N = {n:5}, step failed: {e}");
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = scenario.advance(1.0 / 60.0) {
                println!("N = {n:5}, step failed: {e}");
                break;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, advance = {:10.6} s/step, {:8.3} ns/pair", per_step, per_step * 1e9 / (n * (n - 1)) as f64);
    }
}
