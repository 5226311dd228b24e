//! Per-role dashboard views.

use serde::Serialize;

use super::appointments::{appointments_on, pending, sorted_by_time, upcoming_after};
use crate::models::{Appointment, Doctor, MedicalRecord, Patient, Role};
use crate::store::StoreSnapshot;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
}

impl DashboardStats {
    pub fn from_snapshot(snapshot: &StoreSnapshot) -> Self {
        Self {
            total_patients: snapshot.patients.len(),
            total_doctors: snapshot.doctors.len(),
            total_appointments: snapshot.appointments.len(),
        }
    }
}

/// The landing view of a signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard<'a> {
    Admin {
        stats: DashboardStats,
    },
    Doctor {
        /// `None` if the doctor has since been deleted
        doctor: Option<&'a Doctor>,
        today: Vec<&'a Appointment>,
        upcoming: Vec<&'a Appointment>,
    },
    Patient {
        /// `None` if the patient has since been deleted
        patient: Option<&'a Patient>,
        pending: Vec<&'a Appointment>,
        history: &'a [MedicalRecord],
    },
    Receptionist {
        /// Today's appointments across all doctors, ordered by time
        today: Vec<&'a Appointment>,
    },
}

/// Build the dashboard of the snapshot's signed-in user for the given ISO date.
///
/// Returns `None` when nobody is signed in.
pub fn dashboard_for<'a>(snapshot: &'a StoreSnapshot, today: &str) -> Option<Dashboard<'a>> {
    let user = snapshot.current_user.as_ref()?;
    let appointments = snapshot.appointments.as_slice();

    let dashboard = match &user.role {
        Role::Admin => Dashboard::Admin {
            stats: DashboardStats::from_snapshot(snapshot),
        },
        Role::Doctor { doctor_id } => {
            let mine: Vec<&Appointment> = appointments
                .iter()
                .filter(|a| &a.doctor_id == doctor_id)
                .collect();
            Dashboard::Doctor {
                doctor: snapshot.doctor(doctor_id),
                today: appointments_on(mine.iter().copied(), today),
                upcoming: upcoming_after(mine, today),
            }
        }
        Role::Patient { patient_id } => {
            let patient = snapshot.patient(patient_id);
            Dashboard::Patient {
                patient,
                pending: pending(appointments.iter().filter(|a| &a.patient_id == patient_id)),
                history: patient.map(|p| p.medical_history.as_slice()).unwrap_or(&[]),
            }
        }
        Role::Receptionist => Dashboard::Receptionist {
            today: sorted_by_time(appointments_on(appointments, today)),
        },
    };

    Some(dashboard)
}
