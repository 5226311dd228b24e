//! CareSync demo: boots one dashboard session and renders every role's view.
//!
//! Usage: `caresync-demo [config.json]`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use caresync_core::config::{AppConfig, APP_NAME, APP_VERSION};
use caresync_core::fixtures::{demo_users, SEED_TODAY};
use caresync_core::views::{self, nav_links};
use caresync_core::{AppointmentRequest, Doctor, DomainStore, Gender, Patient, SimulatedApi};

mod render;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => AppConfig {
            reference_date: Some(SEED_TODAY.to_string()),
            ..AppConfig::default()
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("{} demo starting v{}", APP_NAME, APP_VERSION);

    let mut store = DomainStore::new();
    let api = SimulatedApi::new(config.fetch_delay());
    if let Err(e) = store.load(&api).await {
        tracing::warn!(error = %e, "Continuing with empty collections");
    }

    let today = config.today();
    seed_session_activity(&mut store, &today);

    for user in demo_users() {
        let role = user.role.kind();
        store.login(user);

        let snapshot = store.snapshot();
        let links: Vec<_> = nav_links(role).iter().map(|l| l.label).collect();
        println!("==== {} | {}", role, links.join(" · "));

        if let Some(dashboard) = views::dashboard_for(&snapshot, &today) {
            print!("{}", render::DashboardText(&dashboard));
        }
        let visible =
            views::visible_appointments(&snapshot.appointments, snapshot.current_user.as_ref());
        print!("{}", render::AppointmentTable(&visible));

        store.logout();
    }

    let matches = views::search_patients(store.patients(), "chen");
    println!("Patient search \"chen\": {} match(es)", matches.len());

    Ok(())
}

/// Walk through the receptionist and admin actions the dashboard offers.
fn seed_session_activity(store: &mut DomainStore, today: &str) {
    match Patient::new(
        "Ava Thompson".into(),
        29,
        Gender::Female,
        "O-".into(),
        "ava.t@email.com".into(),
    ) {
        Ok(patient) => {
            let patient_id = patient.id.clone();
            if let Err(e) = store.add_patient(patient) {
                tracing::warn!(error = %e, "Could not register patient");
            }
            let booking = store.add_appointment(AppointmentRequest {
                patient_id,
                doctor_id: "doc-03".into(),
                date: today.to_string(),
                time: "08:45 AM".into(),
                reason: "Dizziness".into(),
            });
            if let Err(e) = booking {
                tracing::warn!(error = %e, "Could not book appointment");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Invalid patient form"),
    }

    match Doctor::new("Dr. Priya Nair".into(), "Dermatology".into()) {
        Ok(doctor) => {
            if let Err(e) = store.add_doctor(doctor) {
                tracing::warn!(error = %e, "Could not register doctor");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Invalid doctor form"),
    }

    // Booking against an unknown patient is refused, not silently dropped.
    let rejected = store.add_appointment(AppointmentRequest {
        patient_id: "pat-99".into(),
        doctor_id: "doc-01".into(),
        date: today.to_string(),
        time: "09:00".into(),
        reason: "Checkup".into(),
    });
    if let Err(e) = rejected {
        tracing::info!(error = %e, "Booking refused");
    }
}
