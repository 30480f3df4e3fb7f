//! Notification title/message templates.

use chrono::NaiveDate;

use courtyard_entity::booking::BookingStatus;

/// Formats a booking date the way it appears in notification text.
fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Title and message for a booking status change.
pub fn booking_status(
    status: BookingStatus,
    facility_name: &str,
    date: NaiveDate,
    time: &str,
) -> (String, String) {
    let date = fmt_date(date);
    match status {
        BookingStatus::Approved => (
            format!("Booking Approved: {facility_name}"),
            format!("Your booking for {facility_name} on {date} at {time} has been approved."),
        ),
        BookingStatus::Rejected => (
            format!("Booking Rejected: {facility_name}"),
            format!("Your booking for {facility_name} on {date} at {time} has been rejected."),
        ),
        BookingStatus::Canceled => (
            format!("Booking Canceled: {facility_name}"),
            format!("Your booking for {facility_name} on {date} at {time} has been canceled."),
        ),
        other => (
            format!("Booking Update: {facility_name}"),
            format!(
                "Your booking for {facility_name} on {date} at {time} has been updated to {other}."
            ),
        ),
    }
}

/// Title and message for joining a waitlist at a given rank.
pub fn waitlist_joined(
    facility_name: &str,
    date: NaiveDate,
    time: &str,
    position: i32,
) -> (String, String) {
    (
        format!("Waitlist Update: {facility_name}"),
        format!(
            "You are now at position #{position} on the waitlist for {facility_name} on {} at {time}.",
            fmt_date(date)
        ),
    )
}

/// Title and message for a promotion off the waitlist.
pub fn waitlist_promoted(facility_name: &str, date: NaiveDate, time: &str) -> (String, String) {
    (
        format!("Booking Available: {facility_name}"),
        format!(
            "Good news! A spot has opened up for {facility_name} on {} at {time}. \
             Your booking has been moved from the waitlist to pending approval.",
            fmt_date(date)
        ),
    )
}

/// Title and message for a booking restriction (penalty).
pub fn penalty(penalty_hours: i64, reason: &str) -> (String, String) {
    (
        "Booking Restriction Applied".to_string(),
        format!(
            "Due to {reason}, you are restricted from making new bookings \
             for the next {penalty_hours} hours."
        ),
    )
}

/// Title and message for a pre-slot reminder.
pub fn reminder(facility_name: &str, time: &str) -> (String, String) {
    (
        format!("Reminder: {facility_name}"),
        format!(
            "Your booking for {facility_name} is scheduled for today at {time}. Don't forget!"
        ),
    )
}
