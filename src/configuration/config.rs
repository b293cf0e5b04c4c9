//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the degenerate-geometry policy
//! - [`ClockConfig`]      – initial time scale and pause state
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 1.1857e-4            # AU^3 / (M_E * yr^2)
//!   degenerate: reject      # or !floor { min_separation: 1.0e-6 }
//!
//! clock:
//!   scale_index: 3          # index into the time-scale table, clamped
//!   paused: false
//!
//! bodies:
//!   - m: 332937.0           # Earth masses
//!     x: [ 0.0, 0.0, 0.0 ]  # AU, z may be omitted
//!     v: [ 0.0, 0.0 ]       # AU / year
//! ```
//!
//! `parameters` and `clock` can be left out entirely.

use serde::Deserialize;

use crate::simulation::clock::DEFAULT_SCALE_INDEX;
use crate::simulation::error::SimError;
use crate::simulation::params::{DegeneratePolicy, G_SOLAR};
use crate::simulation::states::NVec3;

/// How zero separations are handled
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateConfig {
    /// Fail the step and leave the state untouched
    Reject,
    /// Clamp the distance to `min_separation` AU
    Floor { min_separation: f64 },
}

impl Default for DegenerateConfig {
    fn default() -> Self {
        DegenerateConfig::Reject
    }
}

impl DegenerateConfig {
    pub fn to_policy(&self) -> Result<DegeneratePolicy, SimError> {
        match *self {
            DegenerateConfig::Reject => Ok(DegeneratePolicy::Reject),
            DegenerateConfig::Floor { min_separation } => {
                // the cube is what the gravity term divides by
                let cube = min_separation * min_separation * min_separation;
                if !(min_separation > 0.0) || !cube.is_normal() {
                    return Err(SimError::InvalidParameter {
                        name: "min_separation",
                        value: min_separation,
                    });
                }
                Ok(DegeneratePolicy::Floor { min_separation })
            }
        }
    }
}

fn default_g() -> f64 {
    G_SOLAR
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub degenerate: DegenerateConfig,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: G_SOLAR,
            degenerate: DegenerateConfig::default(),
        }
    }
}

fn default_scale_index() -> i64 {
    DEFAULT_SCALE_INDEX as i64
}

/// Initial clock state
#[derive(Deserialize, Debug, Clone)]
pub struct ClockConfig {
    #[serde(default = "default_scale_index")]
    pub scale_index: i64, // clamped to the table, so out-of-range values are fine
    #[serde(default)]
    pub paused: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            scale_index: default_scale_index(),
            paused: false,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub m: f64,      // Mass in Earth masses
    pub x: Vec<f64>, // Initial position in AU, 2 or 3 components
    pub v: Vec<f64>, // Initial velocity in AU / year, 2 or 3 components
}

impl BodyConfig {
    pub fn position(&self) -> Result<NVec3, SimError> {
        to_nvec3("x", &self.x)
    }

    pub fn velocity(&self) -> Result<NVec3, SimError> {
        to_nvec3("v", &self.v)
    }
}

fn to_nvec3(field: &'static str, c: &[f64]) -> Result<NVec3, SimError> {
    match *c {
        [x, y] => Ok(NVec3::new(x, y, 0.0)),
        [x, y, z] => Ok(NVec3::new(x, y, z)),
        _ => Err(SimError::InvalidVector { field, len: c.len() }),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // Physical parameters
    #[serde(default)]
    pub clock: ClockConfig, // Initial time scale and pause state
    pub bodies: Vec<BodyConfig>, // Bodies in creation order
}
