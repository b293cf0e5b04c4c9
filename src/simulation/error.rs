//! Error type shared by the registry, the force terms and the integrator

use thiserror::Error;

use crate::simulation::states::BodyId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Bodies must carry a strictly positive, finite mass
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("no body with id {0}")]
    NotFound(BodyId),

    /// Two bodies are closer than the gravity term can handle
    #[error("bodies {first} and {second} are degenerate (separation {separation:e} AU)")]
    DegenerateGeometry {
        first: BodyId,
        second: BodyId,
        separation: f64,
    },

    #[error("elapsed real time must be finite and non-negative, got {0}")]
    InvalidElapsed(f64),

    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("`{field}` needs 2 or 3 components, got {len}")]
    InvalidVector { field: &'static str, len: usize },
}
