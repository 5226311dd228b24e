//! Patient search.

use crate::models::Patient;

/// Patients whose name contains `query`, ignoring case.
///
/// An empty query matches everyone.
pub fn search_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    patients.iter().filter(|p| p.name_matches(query)).collect()
}
