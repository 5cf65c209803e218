pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, Bounds};
pub use simulation::forces::{Kick, KickSet, PairGravity};
pub use simulation::boundary::apply_boundary;
pub use simulation::integrator::euler_step;
pub use simulation::trajectory::{Trajectory, TrailPoint};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, WindowConfig, BodyConfig};

pub use visualization::framebuffer::FrameBuffer;
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_fill_circle};
