//! Per-role sidebar navigation.

use crate::models::RoleKind;

/// Dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Appointments,
    Patients,
    Doctors,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Appointments => "/appointments",
            Page::Patients => "/patients",
            Page::Doctors => "/doctors",
        }
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
}

const fn link(page: Page, label: &'static str) -> NavLink {
    NavLink { page, label }
}

const ADMIN_LINKS: &[NavLink] = &[
    link(Page::Dashboard, "Dashboard"),
    link(Page::Appointments, "Appointments"),
    link(Page::Patients, "Patients"),
    link(Page::Doctors, "Doctors"),
];

const DOCTOR_LINKS: &[NavLink] = &[
    link(Page::Dashboard, "Dashboard"),
    link(Page::Appointments, "My Appointments"),
    link(Page::Patients, "My Patients"),
];

const PATIENT_LINKS: &[NavLink] = &[
    link(Page::Dashboard, "Dashboard"),
    link(Page::Appointments, "My Appointments"),
];

const RECEPTIONIST_LINKS: &[NavLink] = &[
    link(Page::Dashboard, "Dashboard"),
    link(Page::Appointments, "All Appointments"),
    link(Page::Patients, "Manage Patients"),
];

/// Sidebar entries for a role.
pub fn nav_links(role: RoleKind) -> &'static [NavLink] {
    match role {
        RoleKind::Admin => ADMIN_LINKS,
        RoleKind::Doctor => DOCTOR_LINKS,
        RoleKind::Patient => PATIENT_LINKS,
        RoleKind::Receptionist => RECEPTIONIST_LINKS,
    }
}

/// Whether a role's sidebar reaches the page.
pub fn can_access(role: RoleKind, page: Page) -> bool {
    nav_links(role).iter().any(|l| l.page == page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_dashboard_first() {
        for role in RoleKind::ALL {
            assert_eq!(nav_links(role)[0].page, Page::Dashboard);
        }
    }

    #[test]
    fn test_only_admin_manages_doctors() {
        assert!(can_access(RoleKind::Admin, Page::Doctors));
        assert!(!can_access(RoleKind::Doctor, Page::Doctors));
        assert!(!can_access(RoleKind::Receptionist, Page::Doctors));
        assert!(!can_access(RoleKind::Patient, Page::Patients));
    }

    #[test]
    fn test_labels() {
        assert_eq!(nav_links(RoleKind::Receptionist)[2].label, "Manage Patients");
        assert_eq!(Page::Appointments.path(), "/appointments");
    }
}
