//! Signed-in user identity and roles.

use serde::{Deserialize, Serialize};

/// A user's role, carrying the clinical identity for doctors and patients.
///
/// The doctor and patient variants link the login identity to the entity whose
/// appointments that user sees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind")]
pub enum Role {
    Admin,
    Doctor {
        #[serde(rename = "doctorId")]
        doctor_id: String,
    },
    Patient {
        #[serde(rename = "patientId")]
        patient_id: String,
    },
    Receptionist,
}

/// Role discriminant without payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Admin,
    Doctor,
    Patient,
    Receptionist,
}

impl RoleKind {
    /// Roles in login-screen order.
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Admin,
        RoleKind::Doctor,
        RoleKind::Patient,
        RoleKind::Receptionist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Admin => "Admin",
            RoleKind::Doctor => "Doctor",
            RoleKind::Patient => "Patient",
            RoleKind::Receptionist => "Receptionist",
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Admin => RoleKind::Admin,
            Role::Doctor { .. } => RoleKind::Doctor,
            Role::Patient { .. } => RoleKind::Patient,
            Role::Receptionist => RoleKind::Receptionist,
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_kind() {
        let role = Role::Doctor {
            doctor_id: "doc-01".into(),
        };
        assert_eq!(role.kind(), RoleKind::Doctor);
        assert_eq!(Role::Receptionist.kind().to_string(), "Receptionist");
    }

    #[test]
    fn test_role_json_shape() {
        let role = Role::Patient {
            patient_id: "pat-01".into(),
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["kind"], "Patient");
        assert_eq!(json["patientId"], "pat-01");

        let back: Role = serde_json::from_value(json).unwrap();
        assert_eq!(back, role);
    }
}
