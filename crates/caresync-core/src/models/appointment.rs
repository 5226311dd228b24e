//! Appointment models.

use serde::{Deserialize, Serialize};

use super::{new_id, Doctor, Patient};

/// Appointment lifecycle status.
///
/// Only `Upcoming` is ever assigned by the store; the other states come from
/// seed data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
    Arrived,
    Consulting,
    Done,
}

impl AppointmentStatus {
    /// Every status, in declaration order.
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Upcoming,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Arrived,
        AppointmentStatus::Consulting,
        AppointmentStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Arrived => "Arrived",
            AppointmentStatus::Consulting => "Consulting",
            AppointmentStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A booked appointment.
///
/// `patient_name` and `doctor_name` are copied at booking time and are not
/// refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique id (`app-…`)
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    /// Clock time as entered (e.g. "10:00 AM" or "14:30")
    pub time: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Booking input for a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl Appointment {
    /// Build an upcoming appointment for resolved participants.
    pub fn book(request: AppointmentRequest, patient: &Patient, doctor: &Doctor) -> Self {
        Self {
            id: new_id("app"),
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            date: request.date,
            time: request.time,
            reason: request.reason,
            status: AppointmentStatus::Upcoming,
        }
    }

    /// Whether the appointment falls on the given ISO date.
    pub fn is_on(&self, date: &str) -> bool {
        self.date == date
    }

    /// Whether the appointment is strictly after the given ISO date.
    ///
    /// ISO dates order lexicographically the same as chronologically.
    pub fn is_after(&self, date: &str) -> bool {
        self.date.as_str() > date
    }
}
