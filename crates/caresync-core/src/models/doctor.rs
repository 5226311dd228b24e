//! Doctor models.

use serde::{Deserialize, Serialize};

use super::{avatar_for, new_id, require, ValidationError};

/// A doctor registered with the hospital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Unique id (`doc-…`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Medical specialty (e.g. "Cardiology")
    pub specialty: String,
    /// Avatar image reference
    pub avatar: String,
}

impl Doctor {
    /// Register a new doctor with a freshly minted id.
    pub fn new(name: String, specialty: String) -> Result<Self, ValidationError> {
        require(&name, "name")?;
        require(&specialty, "specialty")?;
        let id = new_id("doc");
        Ok(Self {
            avatar: avatar_for(&id),
            id,
            name,
            specialty,
        })
    }
}
