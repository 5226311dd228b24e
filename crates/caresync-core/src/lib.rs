//! CareSync Core Library
//!
//! Role-based hospital dashboard state: patients, doctors and appointments
//! held in memory for one session, with per-role views derived on demand.
//!
//! # Architecture
//!
//! ```text
//! Fixture Source ──(one-time load)──▶ DomainStore ──snapshot──▶ Views
//!                                         ▲                      │
//!                                         │                      ▼
//!                                   add / delete /        Presentation layer
//!                                   login / logout  ◀──── (user actions)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Doctor, Appointment, User, Role)
//! - [`store`]: The domain store, sole writer of the collections
//! - [`views`]: Pure role- and page-scoped projections
//! - [`fixtures`]: Seed data and the simulated remote API
//! - [`config`]: Session configuration

pub mod config;
pub mod fixtures;
pub mod models;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use config::AppConfig;
pub use fixtures::{FixtureSet, FixtureSource, SimulatedApi};
pub use models::{
    Appointment, AppointmentRequest, AppointmentStatus, Doctor, Gender, MedicalRecord, Patient,
    Role, RoleKind, User,
};
pub use store::{DomainStore, StoreError, StoreSnapshot};
pub use views::{dashboard_for, status_tag, visible_appointments, Dashboard, StatusTag};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CareSyncError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CareSyncError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PatientNotFound(_) | StoreError::DoctorNotFound(_) => {
                CareSyncError::NotFound(e.to_string())
            }
            StoreError::DuplicateId { .. } | StoreError::AlreadyLoaded => {
                CareSyncError::Conflict(e.to_string())
            }
            StoreError::Fixture(_) => CareSyncError::Internal(e.to_string()),
        }
    }
}

impl From<models::ValidationError> for CareSyncError {
    fn from(e: models::ValidationError) -> Self {
        CareSyncError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CareSyncError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CareSyncError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty store that still awaits its initial data.
///
/// Call [`CareSyncCore::load_fixtures`] to populate it and clear the loading flag.
#[uniffi::export]
pub fn open_store() -> Arc<CareSyncCore> {
    Arc::new(CareSyncCore::from_store(DomainStore::new()))
}

/// Create a store populated with the built-in seed data.
#[uniffi::export]
pub fn open_seeded_store() -> Result<Arc<CareSyncCore>, CareSyncError> {
    let seed = FixtureSet::seed();
    let store = DomainStore::with_collections(seed.patients, seed.doctors, seed.appointments)?;
    Ok(Arc::new(CareSyncCore::from_store(store)))
}

/// Login identities offered on the sign-in screen, one per role.
#[uniffi::export]
pub fn demo_users() -> Vec<FfiUser> {
    fixtures::demo_users().into_iter().map(Into::into).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct CareSyncCore {
    store: Arc<Mutex<DomainStore>>,
}

impl CareSyncCore {
    pub fn from_store(store: DomainStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[uniffi::export]
impl CareSyncCore {
    // =========================================================================
    // Session
    // =========================================================================

    /// Sign a user in.
    pub fn login(&self, user: FfiUser) -> Result<(), CareSyncError> {
        let user = User::try_from(user)?;
        self.store.lock()?.login(user);
        Ok(())
    }

    /// Sign the current user out.
    pub fn logout(&self) -> Result<(), CareSyncError> {
        self.store.lock()?.logout();
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Result<Option<FfiUser>, CareSyncError> {
        let store = self.store.lock()?;
        Ok(store.current_user().cloned().map(Into::into))
    }

    /// Whether the initial data is still loading.
    pub fn is_loading(&self) -> Result<bool, CareSyncError> {
        Ok(self.store.lock()?.is_loading())
    }

    /// Load the built-in seed data through the simulated API, blocking the
    /// caller for the fetch delay.
    ///
    /// The loading flag is cleared even when the load fails.
    pub fn load_fixtures(&self, delay_ms: u64) -> Result<(), CareSyncError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| CareSyncError::Internal(format!("Runtime unavailable: {}", e)))?;
        let api = SimulatedApi::new(std::time::Duration::from_millis(delay_ms));

        let mut store = self.store.lock()?;
        runtime.block_on(store.load(&api))?;
        Ok(())
    }

    // =========================================================================
    // Doctors
    // =========================================================================

    pub fn list_doctors(&self) -> Result<Vec<FfiDoctor>, CareSyncError> {
        let store = self.store.lock()?;
        Ok(store.doctors().iter().cloned().map(Into::into).collect())
    }

    /// Register a doctor and return it.
    pub fn add_doctor(&self, name: String, specialty: String) -> Result<FfiDoctor, CareSyncError> {
        let doctor = Doctor::new(name, specialty)?;
        self.store.lock()?.add_doctor(doctor.clone())?;
        Ok(doctor.into())
    }

    /// Delete a doctor. Returns whether one was removed.
    pub fn delete_doctor(&self, doctor_id: String) -> Result<bool, CareSyncError> {
        Ok(self.store.lock()?.delete_doctor(&doctor_id).is_some())
    }

    // =========================================================================
    // Patients
    // =========================================================================

    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, CareSyncError> {
        let store = self.store.lock()?;
        Ok(store.patients().iter().cloned().map(Into::into).collect())
    }

    /// Search patients by name, ignoring case.
    pub fn search_patients(&self, query: String) -> Result<Vec<FfiPatient>, CareSyncError> {
        let store = self.store.lock()?;
        Ok(views::search_patients(store.patients(), &query)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Register a patient and return it.
    pub fn add_patient(
        &self,
        name: String,
        age: u32,
        gender: FfiGender,
        blood_type: String,
        contact: String,
    ) -> Result<FfiPatient, CareSyncError> {
        let patient = Patient::new(name, age, gender.into(), blood_type, contact)?;
        self.store.lock()?.add_patient(patient.clone())?;
        Ok(patient.into())
    }

    /// Delete a patient. Returns whether one was removed.
    pub fn delete_patient(&self, patient_id: String) -> Result<bool, CareSyncError> {
        Ok(self.store.lock()?.delete_patient(&patient_id).is_some())
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Book an appointment between an existing patient and doctor.
    pub fn book_appointment(
        &self,
        patient_id: String,
        doctor_id: String,
        date: String,
        time: String,
        reason: String,
    ) -> Result<FfiAppointment, CareSyncError> {
        let request = AppointmentRequest {
            patient_id,
            doctor_id,
            date,
            time,
            reason,
        };
        let appointment = self.store.lock()?.add_appointment(request)?;
        Ok(appointment.into())
    }

    /// Appointments visible to the signed-in user.
    pub fn visible_appointments(&self) -> Result<Vec<FfiAppointment>, CareSyncError> {
        let store = self.store.lock()?;
        Ok(
            views::visible_appointments(store.appointments(), store.current_user())
                .into_iter()
                .cloned()
                .map(Into::into)
                .collect(),
        )
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe role discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiRoleKind {
    Admin,
    Doctor,
    Patient,
    Receptionist,
}

/// FFI-safe user. `linked_id` is the doctor or patient id for those roles.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUser {
    pub id: String,
    pub name: String,
    pub role: FfiRoleKind,
    pub linked_id: Option<String>,
    pub avatar: String,
}

impl From<User> for FfiUser {
    fn from(user: User) -> Self {
        let (role, linked_id) = match user.role {
            Role::Admin => (FfiRoleKind::Admin, None),
            Role::Doctor { doctor_id } => (FfiRoleKind::Doctor, Some(doctor_id)),
            Role::Patient { patient_id } => (FfiRoleKind::Patient, Some(patient_id)),
            Role::Receptionist => (FfiRoleKind::Receptionist, None),
        };
        Self {
            id: user.id,
            name: user.name,
            role,
            linked_id,
            avatar: user.avatar,
        }
    }
}

impl TryFrom<FfiUser> for User {
    type Error = CareSyncError;

    fn try_from(user: FfiUser) -> Result<Self, Self::Error> {
        let missing_link =
            || CareSyncError::InvalidInput(format!("User {} has no linked record id", user.id));
        let role = match user.role {
            FfiRoleKind::Admin => Role::Admin,
            FfiRoleKind::Doctor => Role::Doctor {
                doctor_id: user.linked_id.clone().ok_or_else(missing_link)?,
            },
            FfiRoleKind::Patient => Role::Patient {
                patient_id: user.linked_id.clone().ok_or_else(missing_link)?,
            },
            FfiRoleKind::Receptionist => Role::Receptionist,
        };
        Ok(User {
            id: user.id,
            name: user.name,
            role,
            avatar: user.avatar,
        })
    }
}

/// FFI-safe gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiGender {
    Male,
    Female,
    Other,
}

impl From<FfiGender> for Gender {
    fn from(gender: FfiGender) -> Self {
        match gender {
            FfiGender::Male => Gender::Male,
            FfiGender::Female => Gender::Female,
            FfiGender::Other => Gender::Other,
        }
    }
}

impl From<Gender> for FfiGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => FfiGender::Male,
            Gender::Female => FfiGender::Female,
            Gender::Other => FfiGender::Other,
        }
    }
}

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub avatar: String,
}

impl From<Doctor> for FfiDoctor {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            specialty: doctor.specialty,
            avatar: doctor.avatar,
        }
    }
}

/// FFI-safe medical record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicalRecord {
    pub id: String,
    pub date: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

impl From<MedicalRecord> for FfiMedicalRecord {
    fn from(record: MedicalRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            diagnosis: record.diagnosis,
            prescription: record.prescription,
            notes: record.notes,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: FfiGender,
    pub blood_type: String,
    pub contact: String,
    pub avatar: String,
    pub medical_history: Vec<FfiMedicalRecord>,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            gender: patient.gender.into(),
            blood_type: patient.blood_type,
            contact: patient.contact,
            avatar: patient.avatar,
            medical_history: patient
                .medical_history
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// FFI-safe appointment, with its status badge classes resolved.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub status_classes: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            status: appointment.status.to_string(),
            status_classes: status_tag(appointment.status).css_classes().to_string(),
            id: appointment.id,
            patient_id: appointment.patient_id,
            patient_name: appointment.patient_name,
            doctor_id: appointment.doctor_id,
            doctor_name: appointment.doctor_name,
            date: appointment.date,
            time: appointment.time,
            reason: appointment.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_via_ffi() {
        let core = open_seeded_store().unwrap();
        assert!(!core.is_loading().unwrap());
        assert_eq!(core.list_patients().unwrap().len(), 4);
        assert_eq!(core.list_doctors().unwrap().len(), 3);
        assert!(core.visible_appointments().unwrap().is_empty());
    }

    #[test]
    fn test_empty_store_loads_via_ffi() {
        let core = open_store();
        assert!(core.is_loading().unwrap());
        assert!(core.list_patients().unwrap().is_empty());

        core.load_fixtures(0).unwrap();

        assert!(!core.is_loading().unwrap());
        assert_eq!(core.list_patients().unwrap().len(), 4);
        assert_eq!(core.list_doctors().unwrap().len(), 3);
    }

    #[test]
    fn test_second_ffi_load_conflicts() {
        let core = open_store();
        core.load_fixtures(0).unwrap();
        core.delete_patient("pat-01".into()).unwrap();

        let err = core.load_fixtures(0).unwrap_err();
        assert!(matches!(err, CareSyncError::Conflict(_)));
        assert!(!core.is_loading().unwrap());
        assert_eq!(core.list_patients().unwrap().len(), 3);
    }

    #[test]
    fn test_login_as_doctor_scopes_appointments() {
        let core = open_seeded_store().unwrap();
        let doctor = demo_users()
            .into_iter()
            .find(|u| u.role == FfiRoleKind::Doctor)
            .unwrap();
        core.login(doctor).unwrap();

        let visible = core.visible_appointments().unwrap();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|a| a.doctor_id == "doc-01"));

        core.logout().unwrap();
        assert!(core.current_user().unwrap().is_none());
    }

    #[test]
    fn test_login_requires_linked_id() {
        let core = open_seeded_store().unwrap();
        let user = FfiUser {
            id: "user-x".into(),
            name: "X".into(),
            role: FfiRoleKind::Patient,
            linked_id: None,
            avatar: String::new(),
        };
        assert!(matches!(core.login(user), Err(CareSyncError::InvalidInput(_))));
    }

    #[test]
    fn test_booking_errors_surface() {
        let core = open_seeded_store().unwrap();
        let err = core
            .book_appointment(
                "pat-99".into(),
                "doc-01".into(),
                "2024-09-01".into(),
                "09:00".into(),
                "Checkup".into(),
            )
            .unwrap_err();
        assert!(matches!(err, CareSyncError::NotFound(_)));
    }

    #[test]
    fn test_book_and_register() {
        let core = open_seeded_store().unwrap();
        let patient = core
            .add_patient(
                "Iris Vale".into(),
                33,
                FfiGender::Female,
                "A+".into(),
                "iris@example.com".into(),
            )
            .unwrap();
        let doctor = core
            .add_doctor("Dr. Omar Said".into(), "Orthopedics".into())
            .unwrap();

        let booked = core
            .book_appointment(
                patient.id.clone(),
                doctor.id.clone(),
                "2024-09-02".into(),
                "11:00 AM".into(),
                "Knee pain".into(),
            )
            .unwrap();
        assert_eq!(booked.status, "Upcoming");
        assert!(booked.status_classes.contains("blue"));

        assert!(core.delete_patient(patient.id).unwrap());
        assert!(!core.delete_doctor("doc-99".into()).unwrap());
    }

    #[test]
    fn test_add_patient_validates_age() {
        let core = open_seeded_store().unwrap();
        let result = core.add_patient(
            "Newborn".into(),
            0,
            FfiGender::Other,
            "".into(),
            "parent@example.com".into(),
        );
        assert!(matches!(result, Err(CareSyncError::InvalidInput(_))));
    }
}
