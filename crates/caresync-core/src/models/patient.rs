//! Patient models.

use serde::{Deserialize, Serialize};

use super::{avatar_for, new_id, require, ValidationError};

/// Patient gender as captured on registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// One entry of a patient's medical history.
///
/// Records are owned by their patient and never edited once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    /// Visit date (`YYYY-MM-DD`)
    pub date: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique id (`pat-…`)
    pub id: String,
    pub name: String,
    /// Age in years, always positive
    pub age: u32,
    pub gender: Gender,
    /// ABO/Rh blood type (e.g. "O+")
    pub blood_type: String,
    /// Email or phone
    pub contact: String,
    /// Avatar image reference
    pub avatar: String,
    /// Medical history, oldest first
    #[serde(default)]
    pub medical_history: Vec<MedicalRecord>,
}

impl Patient {
    /// Register a new patient with an empty medical history.
    pub fn new(
        name: String,
        age: u32,
        gender: Gender,
        blood_type: String,
        contact: String,
    ) -> Result<Self, ValidationError> {
        require(&name, "name")?;
        require(&contact, "contact")?;
        if age == 0 {
            return Err(ValidationError::InvalidAge);
        }

        let id = new_id("pat");
        Ok(Self {
            avatar: avatar_for(&id),
            id,
            name,
            age,
            gender,
            blood_type,
            contact,
            medical_history: Vec::new(),
        })
    }

    /// Case-insensitive substring match against the patient's name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
