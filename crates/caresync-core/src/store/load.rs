//! One-time initial load from a fixture source.

use std::sync::Arc;

use super::{check_unique_ids, DomainStore, StoreError, StoreResult};
use crate::fixtures::FixtureSource;

impl DomainStore {
    /// Populate the collections from `source`.
    ///
    /// The three collections are fetched concurrently and applied only if all
    /// of them arrive and none repeats an id. Whatever the outcome, the
    /// loading flag is cleared and a second call returns
    /// [`StoreError::AlreadyLoaded`]. Collections are replaced, not merged.
    pub async fn load<S: FixtureSource>(&mut self, source: &S) -> StoreResult<()> {
        if !self.loading {
            return Err(StoreError::AlreadyLoaded);
        }

        let fetched = tokio::try_join!(
            source.patients(),
            source.doctors(),
            source.appointments()
        )
        .map_err(StoreError::from)
        .and_then(|(patients, doctors, appointments)| {
            check_unique_ids(&patients, &doctors, &appointments)?;
            Ok((patients, doctors, appointments))
        });
        self.loading = false;

        match fetched {
            Ok((patients, doctors, appointments)) => {
                tracing::info!(
                    patients = patients.len(),
                    doctors = doctors.len(),
                    appointments = appointments.len(),
                    "Initial data loaded"
                );
                self.patients = Arc::new(patients);
                self.doctors = Arc::new(doctors);
                self.appointments = Arc::new(appointments);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load initial data");
                Err(e)
            }
        }
    }
}
