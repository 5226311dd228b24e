//! Fixture loading: the stand-in for a remote backend.
//!
//! The store is populated once at startup from a [`FixtureSource`]. The
//! built-in [`SimulatedApi`] serves the static seed data after an artificial
//! delay; [`FixtureSet`] can also be read from a JSON document.

mod api;
mod seed;

pub use api::*;
pub use seed::*;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, Doctor, Patient};

/// Fixture loading errors.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture source unavailable: {0}")]
    Unavailable(String),
}

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Supplier of the initial collections.
///
/// Each call returns a fresh copy of the full collection.
#[allow(async_fn_in_trait)]
pub trait FixtureSource {
    async fn patients(&self) -> FixtureResult<Vec<Patient>>;
    async fn doctors(&self) -> FixtureResult<Vec<Doctor>>;
    async fn appointments(&self) -> FixtureResult<Vec<Appointment>>;
}

/// A complete set of collections, as held by a fixture document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureSet {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl FixtureSet {
    /// The built-in hospital seed data.
    pub fn seed() -> Self {
        Self {
            patients: seed_patients(),
            doctors: seed_doctors(),
            appointments: seed_appointments(),
        }
    }

    /// Parse a fixture document.
    pub fn from_json(json: &str) -> FixtureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a fixture document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> FixtureResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> FixtureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FixtureSource for FixtureSet {
    async fn patients(&self) -> FixtureResult<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    async fn doctors(&self) -> FixtureResult<Vec<Doctor>> {
        Ok(self.doctors.clone())
    }

    async fn appointments(&self) -> FixtureResult<Vec<Appointment>> {
        Ok(self.appointments.clone())
    }
}
