//! Appointment filters.

use std::cmp::Ordering;

use chrono::NaiveTime;

use crate::models::{Appointment, AppointmentStatus, Role, User};

/// Appointments the user may see.
///
/// Admins and receptionists see everything; doctors and patients see only
/// appointments that reference their own clinical id. Nobody signed in sees
/// nothing.
pub fn visible_appointments<'a>(
    appointments: &'a [Appointment],
    user: Option<&User>,
) -> Vec<&'a Appointment> {
    let Some(user) = user else {
        return Vec::new();
    };

    match &user.role {
        Role::Admin | Role::Receptionist => appointments.iter().collect(),
        Role::Doctor { doctor_id } => appointments
            .iter()
            .filter(|a| &a.doctor_id == doctor_id)
            .collect(),
        Role::Patient { patient_id } => appointments
            .iter()
            .filter(|a| &a.patient_id == patient_id)
            .collect(),
    }
}

/// Appointments on the given ISO date.
pub fn appointments_on<'a, I>(appointments: I, date: &str) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments.into_iter().filter(|a| a.is_on(date)).collect()
}

/// Still-upcoming appointments strictly after the given ISO date.
pub fn upcoming_after<'a, I>(appointments: I, date: &str) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .filter(|a| a.is_after(date) && a.status == AppointmentStatus::Upcoming)
        .collect()
}

/// Appointments with status `Upcoming`, whatever their date.
pub fn pending<'a, I>(appointments: I) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .filter(|a| a.status == AppointmentStatus::Upcoming)
        .collect()
}

/// Parse a clock time in either 12-hour (`"02:00 PM"`) or 24-hour (`"14:00"`) form.
pub fn parse_clock_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Order appointments by time of day.
///
/// Parseable times come first in chronological order; the rest follow in
/// plain string order.
pub fn sorted_by_time<'a, I>(appointments: I) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut sorted: Vec<&Appointment> = appointments.into_iter().collect();
    sorted.sort_by(|a, b| compare_times(&a.time, &b.time));
    sorted
}

fn compare_times(a: &str, b: &str) -> Ordering {
    let key = |t: &str| {
        let parsed = parse_clock_time(t);
        (parsed.is_none(), parsed)
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{demo_user, seed_appointments, SEED_TODAY};
    use crate::models::RoleKind;

    fn ids(appointments: &[&Appointment]) -> Vec<String> {
        appointments.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_admin_and_receptionist_see_all() {
        let all = seed_appointments();
        for kind in [RoleKind::Admin, RoleKind::Receptionist] {
            let user = demo_user(kind);
            assert_eq!(visible_appointments(&all, Some(&user)).len(), 5);
        }
    }

    #[test]
    fn test_doctor_sees_own() {
        let all = seed_appointments();
        let user = demo_user(RoleKind::Doctor);
        let visible = visible_appointments(&all, Some(&user));
        assert_eq!(ids(&visible), vec!["app-01", "app-04"]);
    }

    #[test]
    fn test_patient_sees_own() {
        let all = seed_appointments();
        let user = demo_user(RoleKind::Patient);
        let visible = visible_appointments(&all, Some(&user));
        assert_eq!(ids(&visible), vec!["app-01", "app-05"]);
    }

    #[test]
    fn test_visibility_follows_signed_in_identity() {
        let all = seed_appointments();
        let mut user = demo_user(RoleKind::Doctor);
        user.role = Role::Doctor {
            doctor_id: "doc-03".into(),
        };
        let visible = visible_appointments(&all, Some(&user));
        assert_eq!(ids(&visible), vec!["app-03"]);
    }

    #[test]
    fn test_nobody_signed_in() {
        let all = seed_appointments();
        assert!(visible_appointments(&all, None).is_empty());
    }

    #[test]
    fn test_today_and_upcoming() {
        let all = seed_appointments();
        assert_eq!(ids(&appointments_on(&all, SEED_TODAY)), vec!["app-01", "app-02"]);
        assert_eq!(ids(&upcoming_after(&all, SEED_TODAY)), vec!["app-03"]);
        assert!(upcoming_after(&all, "2024-08-06").is_empty());
    }

    #[test]
    fn test_upcoming_excludes_other_statuses() {
        let mut all = seed_appointments();
        all[2].status = AppointmentStatus::Cancelled;
        assert!(upcoming_after(&all, SEED_TODAY).is_empty());
    }

    #[test]
    fn test_pending_ignores_date() {
        let all = seed_appointments();
        assert_eq!(ids(&pending(&all)), vec!["app-01", "app-02", "app-03"]);
    }

    #[test]
    fn test_filters_compose() {
        let all = seed_appointments();
        let user = demo_user(RoleKind::Doctor);
        let today = appointments_on(visible_appointments(&all, Some(&user)), SEED_TODAY);
        assert_eq!(ids(&today), vec!["app-01"]);
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("02:00 PM"), NaiveTime::from_hms_opt(14, 0, 0));
        assert_eq!(parse_clock_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_clock_time("noon"), None);
    }

    #[test]
    fn test_sorted_by_time_is_chronological() {
        let mut all = seed_appointments();
        all[0].time = "02:00 PM".into();
        all[1].time = "10:00".into();
        all[2].time = "sometime".into();
        all[3].time = "09:15 AM".into();
        all[4].time = "anytime".into();

        let sorted = sorted_by_time(&all);
        let times: Vec<_> = sorted.iter().map(|a| a.time.as_str()).collect();
        assert_eq!(times, vec!["09:15 AM", "10:00", "02:00 PM", "anytime", "sometime"]);
    }
}
