//! Integration tests for notification creation, deferred reminders, and the
//! read/unread endpoints.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

async fn transition(
    app: &helpers::TestApp,
    token: &str,
    booking_id: &str,
    status: &str,
) -> helpers::TestResponse {
    app.request(
        "PUT",
        &format!("/api/bookings/{booking_id}/status"),
        Some(serde_json::json!({ "status": status })),
        Some(token),
    )
    .await
}

async fn list_titles(app: &helpers::TestApp, token: &str) -> Vec<String> {
    let response = app
        .request("GET", "/api/notifications", None, Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["data"]["items"]
        .as_array()
        .expect("items")
        .iter()
        .map(|n| n["title"].as_str().expect("title").to_string())
        .collect()
}

async fn reminder_rows(app: &helpers::TestApp, user_id: Uuid) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND notification_type = 'reminder'",
    )
    .bind(user_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("count reminders")
}

#[tokio::test]
async fn test_waitlist_join_notifies_with_position() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder", "password123", "student").await;
    let joiner_id = app.create_test_user("joiner", "password123", "student").await;
    let holder = app.login("holder", "password123").await;
    let joiner = app.login("joiner", "password123").await;
    let facility = app.create_facility("Tennis Court A", "08:00", "12:00").await;

    app.submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    app.submit_booking(&joiner, facility, "2030-06-03", "08:00", "09:00", true)
        .await;

    let titles = list_titles(&app, &joiner).await;
    assert_eq!(titles, vec!["Waitlist Update: Tennis Court A".to_string()]);

    let message: String = sqlx::query_scalar(
        "SELECT message FROM notifications WHERE user_id = $1",
    )
    .bind(joiner_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("notification message");
    assert!(message.contains("position #1"), "{message}");
}

#[tokio::test]
async fn test_approval_notifies_owner() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner", "password123", "student").await;
    app.create_test_user("admin", "password123", "admin").await;
    let owner = app.login("owner", "password123").await;
    let admin = app.login("admin", "password123").await;
    let facility = app.create_facility("Pool", "08:00", "12:00").await;

    let created = app
        .submit_booking(&owner, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = created.body["data"]["id"].as_str().expect("id").to_string();

    transition(&app, &admin, &id, "approved").await;

    let titles = list_titles(&app, &owner).await;
    assert!(titles.contains(&"Booking Approved: Pool".to_string()), "{titles:?}");
}

#[tokio::test]
async fn test_promotion_notifies_promoted_user() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder2", "password123", "student").await;
    app.create_test_user("waiter", "password123", "student").await;
    app.create_test_user("admin2", "password123", "admin").await;
    let holder = app.login("holder2", "password123").await;
    let waiter = app.login("waiter", "password123").await;
    let admin = app.login("admin2", "password123").await;
    let facility = app.create_facility("Gym", "08:00", "12:00").await;

    let primary = app
        .submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let primary_id = primary.body["data"]["id"].as_str().expect("id").to_string();
    app.submit_booking(&waiter, facility, "2030-06-03", "08:00", "09:00", true)
        .await;

    transition(&app, &admin, &primary_id, "rejected").await;

    let titles = list_titles(&app, &waiter).await;
    assert!(
        titles.contains(&"Booking Available: Gym".to_string()),
        "{titles:?}"
    );
    // The rejected holder hears about the rejection, not the promotion.
    let titles = list_titles(&app, &holder).await;
    assert!(titles.contains(&"Booking Rejected: Gym".to_string()), "{titles:?}");
}

#[tokio::test]
async fn test_reminder_deferred_until_release() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_test_user("early", "password123", "student").await;
    app.create_test_user("admin3", "password123", "admin").await;
    let owner = app.login("early", "password123").await;
    let admin = app.login("admin3", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&owner, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = created.body["data"]["id"].as_str().expect("id").to_string();

    transition(&app, &admin, &id, "approved").await;

    // The reminder row exists but is held back from the listing.
    assert_eq!(reminder_rows(&app, owner_id).await, 1);
    let titles = list_titles(&app, &owner).await;
    assert!(
        !titles.iter().any(|t| t.starts_with("Reminder:")),
        "{titles:?}"
    );

    let is_sent: bool = sqlx::query_scalar(
        "SELECT is_sent FROM notifications WHERE user_id = $1 AND notification_type = 'reminder'",
    )
    .bind(owner_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("reminder row");
    assert!(!is_sent);
}

#[tokio::test]
async fn test_no_reminder_for_past_booking() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_test_user("late", "password123", "student").await;
    app.create_test_user("admin4", "password123", "admin").await;
    let owner = app.login("late", "password123").await;
    let admin = app.login("admin4", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&owner, facility, "2020-06-03", "08:00", "09:00", false)
        .await;
    let id = created.body["data"]["id"].as_str().expect("id").to_string();

    transition(&app, &admin, &id, "approved").await;

    assert_eq!(reminder_rows(&app, owner_id).await, 0);
}

#[tokio::test]
async fn test_penalty_notification_surfaces_in_listing() {
    use std::sync::Arc;

    use courtyard_core::config::BookingConfig;
    use courtyard_database::repositories::NotificationRepository;
    use courtyard_service::notification::NotificationDispatcher;

    let app = helpers::TestApp::new().await;
    let user_id = app
        .create_test_user("latecomer", "password123", "student")
        .await;
    let token = app.login("latecomer", "password123").await;

    let dispatcher = NotificationDispatcher::new(
        Arc::new(NotificationRepository::new(app.db_pool.clone())),
        &BookingConfig::default(),
    );
    dispatcher
        .penalty_applied(user_id, 48, "repeated no-shows")
        .await
        .expect("penalty notification");

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    let items = response.body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Booking Restriction Applied");
    assert_eq!(items[0]["notification_type"], "penalty");
    assert!(items[0]["message"]
        .as_str()
        .expect("message")
        .contains("next 48 hours"));
}

#[tokio::test]
async fn test_unread_count_and_mark_read() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder3", "password123", "student").await;
    app.create_test_user("reader", "password123", "student").await;
    let holder = app.login("holder3", "password123").await;
    let reader = app.login("reader", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    app.submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    app.submit_booking(&reader, facility, "2030-06-03", "08:00", "09:00", true)
        .await;

    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(&reader))
        .await;
    assert_eq!(response.body["data"]["count"], 1);

    let list = app
        .request("GET", "/api/notifications", None, Some(&reader))
        .await;
    let notification_id = list.body["data"]["items"][0]["id"]
        .as_str()
        .expect("notification id")
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification_id}/read"),
            None,
            Some(&reader),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(&reader))
        .await;
    assert_eq!(response.body["data"]["count"], 0);
}

#[tokio::test]
async fn test_mark_all_read_and_delete() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder4", "password123", "student").await;
    app.create_test_user("tidy", "password123", "student").await;
    let holder = app.login("holder4", "password123").await;
    let tidy = app.login("tidy", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    app.submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    app.submit_booking(&tidy, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    app.submit_booking(&tidy, facility, "2030-06-04", "08:00", "09:00", false)
        .await;
    app.submit_booking(&holder, facility, "2030-06-04", "09:00", "10:00", true)
        .await;

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(&tidy))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["marked"], 1);

    let list = app
        .request("GET", "/api/notifications", None, Some(&tidy))
        .await;
    let notification_id = list.body["data"]["items"][0]["id"]
        .as_str()
        .expect("notification id")
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notification_id}"),
            None,
            Some(&tidy),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", "/api/notifications", None, Some(&tidy))
        .await;
    assert_eq!(list.body["data"]["items"].as_array().expect("items").len(), 0);
}

#[tokio::test]
async fn test_cannot_touch_another_users_notification() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder5", "password123", "student").await;
    app.create_test_user("target", "password123", "student").await;
    app.create_test_user("snoop", "password123", "student").await;
    let holder = app.login("holder5", "password123").await;
    let target = app.login("target", "password123").await;
    let snoop = app.login("snoop", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    app.submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    app.submit_booking(&target, facility, "2030-06-03", "08:00", "09:00", true)
        .await;

    let list = app
        .request("GET", "/api/notifications", None, Some(&target))
        .await;
    let notification_id = list.body["data"]["items"][0]["id"]
        .as_str()
        .expect("notification id")
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification_id}/read"),
            None,
            Some(&snoop),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notification_id}"),
            None,
            Some(&snoop),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
