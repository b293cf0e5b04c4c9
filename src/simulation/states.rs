//! Core state types for the N-body simulation.
//!
//! - `Body`: one point mass, position and velocity as `NVec3`
//! - `BodyRegistry`: owns every body in creation order and hands out `BodyId`s
//!
//! Units: Earth masses, astronomical units, simulated years.

use std::fmt;

use log::debug;
use nalgebra::Vector3;

use crate::simulation::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Stable identity of a body, assigned in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    m: f64, // mass
    pub(crate) x: NVec3, // position
    pub(crate) v: NVec3, // velocity
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }
}

/// Arena of bodies. Ids only ever grow, so `bodies` stays sorted by id
/// and creation order doubles as iteration order.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u64,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new body and return its id.
    /// Rejects zero, negative and NaN masses.
    pub fn create(&mut self, mass: f64, position: NVec3, velocity: NVec3) -> Result<BodyId, SimError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(SimError::NonPositiveMass(mass));
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            m: mass,
            x: position,
            v: velocity,
        });
        debug!("created body {id} (m = {mass}, x = {position:?}, v = {velocity:?})");

        Ok(id)
    }

    /// All live bodies in creation order. Call again to restart.
    pub fn all(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn get(&self, id: BodyId) -> Result<&Body, SimError> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .map(|i| &self.bodies[i])
            .map_err(|_| SimError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub(crate) fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}
