//! Point-in-time view of the store.

use std::sync::Arc;

use crate::models::{Appointment, Doctor, Patient, User};

/// Immutable capture of the store's collections and signed-in user.
///
/// Cheap to take: collections are shared until the store next writes them.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub patients: Arc<Vec<Patient>>,
    pub doctors: Arc<Vec<Doctor>>,
    pub appointments: Arc<Vec<Appointment>>,
    pub current_user: Option<User>,
}

impl StoreSnapshot {
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }
}
