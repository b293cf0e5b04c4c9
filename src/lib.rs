pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyRegistry, NVec3};
pub use simulation::error::SimError;
pub use simulation::params::{Parameters, DegeneratePolicy, G_SOLAR};
pub use simulation::clock::{SimulationClock, TimeScale, TIME_SCALES};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{leapfrog_step, Integrator};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, ClockConfig, BodyConfig, DegenerateConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_advance;
