//! Wall-clock micro-benchmarks for the physics step and the rasterizer
//!
//! Plain `Instant` timing loops printed to stdout, run via `tbsim --bench`.

use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::framebuffer::FrameBuffer;

/// Time `euler_step` over the default scenario
pub fn bench_step() {
    let steps = 1_000_000;

    let mut scenario = Scenario::build_scenario(ScenarioConfig::default())
        .expect("default scenario must build");

    let start = Instant::now();
    for _ in 0..steps {
        let Scenario {
            system,
            parameters,
            bounds,
            kicks,
        } = &mut scenario;
        euler_step(system, kicks, parameters, bounds);
    }
    let elapsed = start.elapsed();

    println!(
        "bench_step: {} steps in {:?} ({:.0} steps/s)",
        steps,
        elapsed,
        steps as f64 / elapsed.as_secs_f64()
    );
}

/// Time `fill_circle` at a few radii on a window-sized buffer
pub fn bench_fill_circle() {
    let radii = [2.0, 10.0, 30.0, 100.0];
    let calls = 10_000;

    let mut fb = FrameBuffer::new(900, 600);
    let center = NVec2::new(450.0, 300.0);

    for radius in radii {
        let start = Instant::now();
        for i in 0..calls {
            fb.fill_circle(center, radius, i as u32);
        }
        let elapsed = start.elapsed();

        println!(
            "bench_fill_circle: r={:>5.1}, {} calls in {:?} ({:.0} calls/s)",
            radius,
            calls,
            elapsed,
            calls as f64 / elapsed.as_secs_f64()
        );
    }
}
