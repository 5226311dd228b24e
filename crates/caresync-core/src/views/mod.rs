//! Derived, read-only views over the store's collections.
//!
//! Every function here is pure: it borrows collections and returns a
//! projection, never storing anything.

mod appointments;
mod dashboard;
mod navigation;
mod patients;
mod status;

pub use appointments::*;
pub use dashboard::*;
pub use navigation::*;
pub use patients::*;
pub use status::*;

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
