//! Plain-text rendering of derived views.

use std::fmt;

use caresync_core::{status_tag, Appointment, Dashboard};

/// Text form of a role's dashboard.
pub struct DashboardText<'v, 'a>(pub &'v Dashboard<'a>);

impl fmt::Display for DashboardText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Dashboard::Admin { stats } => writeln!(
                f,
                "Total patients: {}  Total doctors: {}  Total appointments: {}",
                stats.total_patients, stats.total_doctors, stats.total_appointments
            ),
            Dashboard::Doctor {
                doctor,
                today,
                upcoming,
            } => {
                if let Some(doctor) = doctor {
                    writeln!(f, "{} ({})", doctor.name, doctor.specialty)?;
                }
                writeln!(f, "Today's schedule:")?;
                write_list(f, today, "No appointments scheduled for today.")?;
                writeln!(f, "Upcoming:")?;
                write_list(f, upcoming, "No upcoming appointments.")
            }
            Dashboard::Patient {
                patient,
                pending,
                history,
            } => {
                if let Some(patient) = patient {
                    writeln!(f, "Welcome, {}!", patient.name)?;
                }
                writeln!(f, "Upcoming appointment:")?;
                write_list(f, pending, "You have no upcoming appointments.")?;
                writeln!(f, "Medical history:")?;
                for record in history.iter() {
                    writeln!(
                        f,
                        "  {} - {} (Rx: {})",
                        record.date, record.diagnosis, record.prescription
                    )?;
                }
                Ok(())
            }
            Dashboard::Receptionist { today } => {
                writeln!(f, "Today's appointments:")?;
                write_list(f, today, "No appointments today.")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, appointments: &[&Appointment], empty: &str) -> fmt::Result {
    if appointments.is_empty() {
        return writeln!(f, "  {}", empty);
    }
    for a in appointments {
        writeln!(
            f,
            "  {} {} {} with {}: {}",
            a.date, a.time, a.patient_name, a.doctor_name, a.reason
        )?;
    }
    Ok(())
}

/// Tabular text form of an appointment list.
pub struct AppointmentTable<'v, 'a>(pub &'v [&'a Appointment]);

impl fmt::Display for AppointmentTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in self.0 {
            writeln!(
                f,
                "  [{:<10}] {:<8} {} {:<9} {:<16} {:<18} {}",
                a.status,
                format!("{:?}", status_tag(a.status)),
                a.date,
                a.time,
                a.patient_name,
                a.doctor_name,
                a.reason
            )?;
        }
        Ok(())
    }
}
