//! The domain store: single owner and writer of the dashboard's collections.
//!
//! Collections are held behind `Arc` and written with `Arc::make_mut`, so a
//! [`StoreSnapshot`] taken before a mutation keeps seeing the old data.

mod load;
mod snapshot;

pub use snapshot::*;

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::fixtures::FixtureError;
use crate::models::{Appointment, AppointmentRequest, Doctor, Patient, User};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Initial data has already been loaded")]
    AlreadyLoaded,

    #[error("Failed to load initial data: {0}")]
    Fixture(#[from] FixtureError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory state of one dashboard session.
#[derive(Debug)]
pub struct DomainStore {
    patients: Arc<Vec<Patient>>,
    doctors: Arc<Vec<Doctor>>,
    appointments: Arc<Vec<Appointment>>,
    current_user: Option<User>,
    loading: bool,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainStore {
    /// Create an empty store awaiting its initial load.
    pub fn new() -> Self {
        Self {
            patients: Arc::default(),
            doctors: Arc::default(),
            appointments: Arc::default(),
            current_user: None,
            loading: true,
        }
    }

    /// Create a store already populated with the given collections.
    ///
    /// The loading flag starts cleared; [`DomainStore::load`] will refuse to run.
    /// Fails if any collection repeats an id.
    pub fn with_collections(
        patients: Vec<Patient>,
        doctors: Vec<Doctor>,
        appointments: Vec<Appointment>,
    ) -> StoreResult<Self> {
        check_unique_ids(&patients, &doctors, &appointments)?;
        Ok(Self {
            patients: Arc::new(patients),
            doctors: Arc::new(doctors),
            appointments: Arc::new(appointments),
            current_user: None,
            loading: false,
        })
    }

    /// True until the initial load has finished, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sign a user in. No credentials are checked.
    pub fn login(&mut self, user: User) {
        tracing::debug!(user_id = %user.id, role = %user.role.kind(), "User signed in");
        self.current_user = Some(user);
    }

    /// Sign the current user out.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::debug!(user_id = %user.id, "User signed out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Capture the current collections and user.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            patients: Arc::clone(&self.patients),
            doctors: Arc::clone(&self.doctors),
            appointments: Arc::clone(&self.appointments),
            current_user: self.current_user.clone(),
        }
    }

    // =========================================================================
    // Doctors
    // =========================================================================

    /// Register a doctor. Newest doctors come first.
    pub fn add_doctor(&mut self, doctor: Doctor) -> StoreResult<()> {
        if self.doctor(&doctor.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: "doctor",
                id: doctor.id,
            });
        }
        tracing::debug!(doctor_id = %doctor.id, "Doctor added");
        Arc::make_mut(&mut self.doctors).insert(0, doctor);
        Ok(())
    }

    /// Remove a doctor. Appointments referencing the doctor are kept.
    pub fn delete_doctor(&mut self, id: &str) -> Option<Doctor> {
        let index = self.doctors.iter().position(|d| d.id == id)?;
        tracing::debug!(doctor_id = %id, "Doctor deleted");
        Some(Arc::make_mut(&mut self.doctors).remove(index))
    }

    // =========================================================================
    // Patients
    // =========================================================================

    /// Register a patient. Newest patients come first.
    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        if self.patient(&patient.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: "patient",
                id: patient.id,
            });
        }
        tracing::debug!(patient_id = %patient.id, "Patient added");
        Arc::make_mut(&mut self.patients).insert(0, patient);
        Ok(())
    }

    /// Remove a patient. Appointments referencing the patient are kept.
    pub fn delete_patient(&mut self, id: &str) -> Option<Patient> {
        let index = self.patients.iter().position(|p| p.id == id)?;
        tracing::debug!(patient_id = %id, "Patient deleted");
        Some(Arc::make_mut(&mut self.patients).remove(index))
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Book an appointment between an existing patient and doctor.
    ///
    /// The new appointment is `Upcoming`, carries the participants' current
    /// names and is placed first.
    pub fn add_appointment(&mut self, request: AppointmentRequest) -> StoreResult<Appointment> {
        let Some(patient) = self.patient(&request.patient_id) else {
            tracing::warn!(patient_id = %request.patient_id, "Booking rejected: unknown patient");
            return Err(StoreError::PatientNotFound(request.patient_id));
        };
        let Some(doctor) = self.doctor(&request.doctor_id) else {
            tracing::warn!(doctor_id = %request.doctor_id, "Booking rejected: unknown doctor");
            return Err(StoreError::DoctorNotFound(request.doctor_id));
        };

        let appointment = Appointment::book(request, patient, doctor);
        tracing::debug!(
            appointment_id = %appointment.id,
            patient_id = %appointment.patient_id,
            doctor_id = %appointment.doctor_id,
            "Appointment booked"
        );
        Arc::make_mut(&mut self.appointments).insert(0, appointment.clone());
        Ok(appointment)
    }
}

/// Reject collections in which an id appears more than once.
pub(crate) fn check_unique_ids(
    patients: &[Patient],
    doctors: &[Doctor],
    appointments: &[Appointment],
) -> StoreResult<()> {
    first_duplicate("patient", patients.iter().map(|p| p.id.as_str()))?;
    first_duplicate("doctor", doctors.iter().map(|d| d.id.as_str()))?;
    first_duplicate("appointment", appointments.iter().map(|a| a.id.as_str()))
}

fn first_duplicate<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{demo_user, seed_appointments, seed_doctors, seed_patients};
    use crate::models::{AppointmentStatus, Gender, RoleKind};

    fn seeded_store() -> DomainStore {
        DomainStore::with_collections(seed_patients(), seed_doctors(), seed_appointments())
            .unwrap()
    }

    fn request(patient_id: &str, doctor_id: &str) -> AppointmentRequest {
        AppointmentRequest {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            date: "2024-09-01".into(),
            time: "09:00".into(),
            reason: "Checkup".into(),
        }
    }

    #[test]
    fn test_new_store_is_loading_and_empty() {
        let store = DomainStore::new();
        assert!(store.is_loading());
        assert!(store.patients().is_empty());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_with_collections_rejects_repeated_ids() {
        let mut patients = seed_patients();
        patients.push(patients[1].clone());

        let err = DomainStore::with_collections(patients, seed_doctors(), seed_appointments())
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateId { kind: "patient", id } if id == "pat-02"
        ));
    }

    #[test]
    fn test_with_collections_rejects_repeated_appointment_ids() {
        let mut appointments = seed_appointments();
        appointments.push(appointments[0].clone());

        let err = DomainStore::with_collections(seed_patients(), seed_doctors(), appointments)
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { kind: "appointment", .. }));
    }

    #[test]
    fn test_login_logout() {
        let mut store = seeded_store();
        store.login(demo_user(RoleKind::Receptionist));
        assert_eq!(store.current_user().unwrap().name, "Sarah Chen");

        store.login(demo_user(RoleKind::Admin));
        assert_eq!(store.current_user().unwrap().role.kind(), RoleKind::Admin);

        store.logout();
        assert!(store.current_user().is_none());
        store.logout();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_add_doctor_prepends() {
        let mut store = seeded_store();
        let doctor = Doctor::new("Dr. New".into(), "Radiology".into()).unwrap();
        let id = doctor.id.clone();

        store.add_doctor(doctor).unwrap();
        assert_eq!(store.doctors().len(), 4);
        assert_eq!(store.doctors()[0].id, id);
    }

    #[test]
    fn test_add_doctor_rejects_duplicate_id() {
        let mut store = seeded_store();
        let mut doctor = Doctor::new("Dr. Clone".into(), "Cardiology".into()).unwrap();
        doctor.id = "doc-01".into();

        let err = store.add_doctor(doctor).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { kind: "doctor", .. }));
        assert_eq!(store.doctors().len(), 3);
    }

    #[test]
    fn test_add_patient_has_empty_history() {
        let mut store = seeded_store();
        let patient = Patient::new(
            "Mia Wong".into(),
            19,
            Gender::Female,
            "B+".into(),
            "mia@example.com".into(),
        )
        .unwrap();
        let id = patient.id.clone();

        store.add_patient(patient).unwrap();
        assert_eq!(store.patients()[0].id, id);
        assert!(store.patient(&id).unwrap().medical_history.is_empty());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = seeded_store();
        assert!(store.delete_doctor("doc-99").is_none());
        assert!(store.delete_patient("pat-99").is_none());
        assert_eq!(store.doctors().len(), 3);
        assert_eq!(store.patients().len(), 4);
    }

    #[test]
    fn test_delete_doctor_keeps_appointments() {
        let mut store = seeded_store();
        let removed = store.delete_doctor("doc-01").unwrap();
        assert_eq!(removed.name, "Dr. James Carter");
        assert!(store.doctor("doc-01").is_none());
        assert_eq!(
            store
                .appointments()
                .iter()
                .filter(|a| a.doctor_id == "doc-01")
                .count(),
            2
        );
    }

    #[test]
    fn test_book_appointment() {
        let mut store = seeded_store();
        let booked = store.add_appointment(request("pat-01", "doc-01")).unwrap();

        assert_eq!(store.appointments().len(), 6);
        assert_eq!(store.appointments()[0], booked);
        assert_eq!(booked.status, AppointmentStatus::Upcoming);
        assert_eq!(booked.reason, "Checkup");
        assert_eq!(booked.patient_name, "Liam Gallagher");
        assert_eq!(booked.doctor_name, "Dr. James Carter");
    }

    #[test]
    fn test_book_unknown_patient() {
        let mut store = seeded_store();
        let err = store.add_appointment(request("pat-99", "doc-01")).unwrap_err();
        assert!(matches!(err, StoreError::PatientNotFound(id) if id == "pat-99"));
        assert_eq!(store.appointments().len(), 5);
    }

    #[test]
    fn test_book_unknown_doctor() {
        let mut store = seeded_store();
        let err = store.add_appointment(request("pat-01", "doc-99")).unwrap_err();
        assert!(matches!(err, StoreError::DoctorNotFound(id) if id == "doc-99"));
        assert_eq!(store.appointments().len(), 5);
    }

    #[test]
    fn test_cached_names_go_stale() {
        let mut store = seeded_store();
        let booked = store.add_appointment(request("pat-02", "doc-03")).unwrap();

        // Re-register the patient under the same id with a new name.
        let mut renamed = store.delete_patient("pat-02").unwrap();
        renamed.name = "Olivia Chen-Park".into();
        store.add_patient(renamed).unwrap();

        let stored = store.appointment(&booked.id).unwrap();
        assert_eq!(stored.patient_name, "Olivia Chen");
    }

    #[test]
    fn test_snapshot_isolated_from_writes() {
        let mut store = seeded_store();
        let before = store.snapshot();

        store.delete_patient("pat-01");
        store.add_appointment(request("pat-02", "doc-02")).unwrap();

        assert_eq!(before.patients.len(), 4);
        assert_eq!(before.appointments.len(), 5);
        assert_eq!(store.patients().len(), 3);
        assert_eq!(store.appointments().len(), 6);
    }
}
