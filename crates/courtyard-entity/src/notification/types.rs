//! Notification type enumeration.

use serde::{Deserialize, Serialize};

/// Category of a notification, used for filtering on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A booking's status changed (approved/rejected/canceled).
    BookingStatus,
    /// A scheduled pre-slot reminder.
    Reminder,
    /// Waitlist admission or promotion.
    Waitlist,
    /// A booking restriction was applied to the user.
    Penalty,
    /// Anything else.
    General,
}

impl NotificationType {
    /// Return the type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingStatus => "booking_status",
            Self::Reminder => "reminder",
            Self::Waitlist => "waitlist",
            Self::Penalty => "penalty",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
