//! Booking engine configuration.

use serde::{Deserialize, Serialize};

/// Booking engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How many minutes before the slot start a reminder notification
    /// is scheduled to fire.
    #[serde(default = "default_reminder_lead")]
    pub reminder_lead_minutes: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reminder_lead_minutes: default_reminder_lead(),
        }
    }
}

fn default_reminder_lead() -> i64 {
    30
}
