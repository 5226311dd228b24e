//! Status badge colours.

use serde::{Deserialize, Serialize};

use crate::models::AppointmentStatus;

/// Presentation tag for an appointment status badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusTag {
    Blue,
    Green,
    Red,
    Yellow,
    Indigo,
    Gray,
}

impl StatusTag {
    /// Tailwind classes for the badge, light and dark variants.
    pub fn css_classes(&self) -> &'static str {
        match self {
            StatusTag::Blue => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300",
            StatusTag::Green => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
            StatusTag::Red => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
            StatusTag::Yellow => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
            }
            StatusTag::Indigo => {
                "bg-indigo-100 text-indigo-800 dark:bg-indigo-900 dark:text-indigo-300"
            }
            StatusTag::Gray => "bg-gray-100 text-gray-800 dark:bg-gray-900 dark:text-gray-300",
        }
    }
}

/// Badge tag for a status.
pub fn status_tag(status: AppointmentStatus) -> StatusTag {
    match status {
        AppointmentStatus::Upcoming => StatusTag::Blue,
        AppointmentStatus::Completed => StatusTag::Green,
        AppointmentStatus::Cancelled => StatusTag::Red,
        AppointmentStatus::Arrived => StatusTag::Yellow,
        AppointmentStatus::Consulting => StatusTag::Indigo,
        AppointmentStatus::Done => StatusTag::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_status_has_distinct_tag() {
        let tags: HashSet<_> = AppointmentStatus::ALL.iter().map(|&s| status_tag(s)).collect();
        assert_eq!(tags.len(), AppointmentStatus::ALL.len());
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(status_tag(AppointmentStatus::Upcoming), StatusTag::Blue);
        assert_eq!(status_tag(AppointmentStatus::Cancelled), StatusTag::Red);
        assert!(status_tag(AppointmentStatus::Done)
            .css_classes()
            .starts_with("bg-gray-100"));
    }
}
