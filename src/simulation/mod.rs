pub mod states;
pub mod params;
pub mod error;
pub mod clock;
pub mod forces;
pub mod integrator;
pub mod scenario;
