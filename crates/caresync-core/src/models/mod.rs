//! Domain models for the CareSync dashboard.

mod appointment;
mod doctor;
mod patient;
mod user;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
pub use user::*;

use thiserror::Error;

/// Avatar service used for generated profile pictures.
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";

/// Errors raised while constructing a model from user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Age must be a positive integer")]
    InvalidAge,
}

/// Build an avatar reference seeded by an entity id.
pub fn avatar_for(seed: &str) -> String {
    format!("{}?u={}", AVATAR_BASE_URL, seed)
}

/// Mint a prefixed unique id (e.g. `doc-5f0c…`).
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
