//! Built-in seed data for the demo hospital.

use crate::models::{
    Appointment, AppointmentStatus, Doctor, Gender, MedicalRecord, Patient, Role, RoleKind, User,
};

fn doctor(id: &str, name: &str, specialty: &str, avatar_seed: &str) -> Doctor {
    Doctor {
        id: id.into(),
        name: name.into(),
        specialty: specialty.into(),
        avatar: crate::models::avatar_for(avatar_seed),
    }
}

fn record(id: &str, date: &str, diagnosis: &str, prescription: &str, notes: &str) -> MedicalRecord {
    MedicalRecord {
        id: id.into(),
        date: date.into(),
        diagnosis: diagnosis.into(),
        prescription: prescription.into(),
        notes: notes.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: Gender,
    blood_type: &str,
    contact: &str,
    avatar_seed: &str,
    medical_history: Vec<MedicalRecord>,
) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        age,
        gender,
        blood_type: blood_type.into(),
        contact: contact.into(),
        avatar: crate::models::avatar_for(avatar_seed),
        medical_history,
    }
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    (patient_id, patient_name): (&str, &str),
    (doctor_id, doctor_name): (&str, &str),
    date: &str,
    time: &str,
    reason: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.into(),
        patient_id: patient_id.into(),
        patient_name: patient_name.into(),
        doctor_id: doctor_id.into(),
        doctor_name: doctor_name.into(),
        date: date.into(),
        time: time.into(),
        reason: reason.into(),
        status,
    }
}

/// Seed doctors.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        doctor("doc-01", "Dr. James Carter", "Cardiology", "doc1"),
        doctor("doc-02", "Dr. Maria Garcia", "Pediatrics", "doc2"),
        doctor("doc-03", "Dr. Chen Wei", "Neurology", "doc3"),
    ]
}

/// Seed patients, with their medical histories.
pub fn seed_patients() -> Vec<Patient> {
    vec![
        patient(
            "pat-01",
            "Liam Gallagher",
            45,
            Gender::Male,
            "O+",
            "liam.g@email.com",
            "pat1",
            vec![
                record(
                    "rec-01",
                    "2023-10-15",
                    "Common Cold",
                    "Rest and fluids",
                    "Patient recovering well.",
                ),
                record(
                    "rec-02",
                    "2024-01-20",
                    "Sprained Ankle",
                    "Ibuprofen and RICE method",
                    "Follow up in 2 weeks.",
                ),
            ],
        ),
        patient(
            "pat-02",
            "Olivia Chen",
            32,
            Gender::Female,
            "A-",
            "olivia.c@email.com",
            "pat2",
            vec![record(
                "rec-03",
                "2024-03-10",
                "Annual Checkup",
                "N/A",
                "All vitals are normal. Good health.",
            )],
        ),
        patient(
            "pat-03",
            "Noah Kim",
            28,
            Gender::Male,
            "B+",
            "noah.k@email.com",
            "pat3",
            vec![record(
                "rec-04",
                "2023-11-05",
                "Migraine",
                "Sumatriptan",
                "Patient reports frequent headaches.",
            )],
        ),
        patient(
            "pat-04",
            "Emma Johnson",
            67,
            Gender::Female,
            "AB+",
            "emma.j@email.com",
            "pat4",
            Vec::new(),
        ),
    ]
}

/// Seed appointments.
pub fn seed_appointments() -> Vec<Appointment> {
    const LIAM: (&str, &str) = ("pat-01", "Liam Gallagher");
    const OLIVIA: (&str, &str) = ("pat-02", "Olivia Chen");
    const NOAH: (&str, &str) = ("pat-03", "Noah Kim");
    const EMMA: (&str, &str) = ("pat-04", "Emma Johnson");
    const CARTER: (&str, &str) = ("doc-01", "Dr. James Carter");
    const GARCIA: (&str, &str) = ("doc-02", "Dr. Maria Garcia");
    const WEI: (&str, &str) = ("doc-03", "Dr. Chen Wei");

    vec![
        appointment("app-01", LIAM, CARTER, "2024-08-05", "10:00 AM", "Chest Pain", AppointmentStatus::Upcoming),
        appointment("app-02", OLIVIA, GARCIA, "2024-08-05", "11:30 AM", "Child Checkup", AppointmentStatus::Upcoming),
        appointment("app-03", NOAH, WEI, "2024-08-06", "02:00 PM", "Headache", AppointmentStatus::Upcoming),
        appointment("app-04", EMMA, CARTER, "2024-07-28", "09:00 AM", "Follow-up", AppointmentStatus::Completed),
        appointment("app-05", LIAM, GARCIA, "2024-07-25", "03:00 PM", "Allergy consultation", AppointmentStatus::Cancelled),
    ]
}

/// The reference "today" of the seed appointments.
pub const SEED_TODAY: &str = "2024-08-05";

/// One login identity per role, in login-screen order.
///
/// The doctor identity is Dr. Carter (`doc-01`) and the patient identity is
/// Liam Gallagher (`pat-01`).
pub fn demo_users() -> Vec<User> {
    RoleKind::ALL.iter().map(|&kind| demo_user(kind)).collect()
}

/// The login identity for a role.
pub fn demo_user(kind: RoleKind) -> User {
    let (id, name, role, avatar_seed) = match kind {
        RoleKind::Admin => ("user-admin-01", "Dr. Evelyn Reed", Role::Admin, "admin"),
        RoleKind::Doctor => (
            "user-doc-01",
            "Dr. James Carter",
            Role::Doctor {
                doctor_id: "doc-01".into(),
            },
            "doctor",
        ),
        RoleKind::Patient => (
            "user-patient-01",
            "Liam Gallagher",
            Role::Patient {
                patient_id: "pat-01".into(),
            },
            "patient",
        ),
        RoleKind::Receptionist => (
            "user-rec-01",
            "Sarah Chen",
            Role::Receptionist,
            "receptionist",
        ),
    };

    User {
        id: id.into(),
        name: name.into(),
        role,
        avatar: crate::models::avatar_for(avatar_seed),
    }
}
