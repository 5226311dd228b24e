//! Simulated remote API with a fixed response delay.

use std::time::Duration;

use super::{FixtureResult, FixtureSet, FixtureSource};
use crate::models::{Appointment, Doctor, Patient};

/// Default artificial latency of every fetch.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(500);

/// Serves a [`FixtureSet`] as if it came over the network.
#[derive(Debug, Clone)]
pub struct SimulatedApi {
    data: FixtureSet,
    delay: Duration,
}

impl SimulatedApi {
    /// Serve the built-in seed data.
    pub fn new(delay: Duration) -> Self {
        Self::with_data(FixtureSet::seed(), delay)
    }

    pub fn with_data(data: FixtureSet, delay: Duration) -> Self {
        Self { data, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedApi {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

impl FixtureSource for SimulatedApi {
    async fn patients(&self) -> FixtureResult<Vec<Patient>> {
        self.wait().await;
        self.data.patients().await
    }

    async fn doctors(&self) -> FixtureResult<Vec<Doctor>> {
        self.wait().await;
        self.data.doctors().await
    }

    async fn appointments(&self) -> FixtureResult<Vec<Appointment>> {
        self.wait().await;
        self.data.appointments().await
    }
}
