//! Integration tests for booking status transitions and waitlist promotion.

mod helpers;

use http::StatusCode;
use serde_json::Value;

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

fn booking_id(response: &helpers::TestResponse) -> String {
    response.body["data"]["id"]
        .as_str()
        .expect("booking id")
        .to_string()
}

#[tokio::test]
async fn test_admin_approves_booking() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student1", "password123", "student")
        .await;
    app.create_test_user("admin", "password123", "admin").await;
    let student = app.login("student1", "password123").await;
    let admin = app.login("admin", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&student, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = booking_id(&created);

    let response = transition(&app, &admin, &id, "approved").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["booking"]["status"], "approved");
    assert!(response.body["data"]["promoted"].is_null());
}

#[tokio::test]
async fn test_rejection_promotes_head_of_waitlist() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder", "password123", "student").await;
    app.create_test_user("first", "password123", "student").await;
    app.create_test_user("second", "password123", "student").await;
    app.create_test_user("admin", "password123", "admin").await;
    let holder = app.login("holder", "password123").await;
    let first = app.login("first", "password123").await;
    let second = app.login("second", "password123").await;
    let admin = app.login("admin", "password123").await;
    let facility = app.create_facility("Popular Court", "08:00", "12:00").await;

    let primary = app
        .submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let primary_id = booking_id(&primary);
    let wait1 = app
        .submit_booking(&first, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    let wait1_id = booking_id(&wait1);
    let wait2 = app
        .submit_booking(&second, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    let wait2_id = booking_id(&wait2);

    let response = transition(&app, &admin, &primary_id, "rejected").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["booking"]["status"], "rejected");

    // The head of the waitlist takes over the slot as a fresh pending request.
    let promoted = &response.body["data"]["promoted"];
    assert_eq!(promoted["id"], Value::String(wait1_id.clone()));
    assert_eq!(promoted["status"], "pending");
    assert!(promoted["waitlist_position"].is_null());
    assert_eq!(promoted["remarks"], "Promoted from waitlist");

    // The remaining waitlisted booking keeps its original rank.
    let remaining = app
        .request(
            "GET",
            &format!("/api/bookings/{wait2_id}"),
            None,
            Some(&second),
        )
        .await;
    assert_eq!(remaining.body["data"]["waitlist_position"], 2);
}

#[tokio::test]
async fn test_student_cancels_own_booking() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("canceller", "password123", "student")
        .await;
    let token = app.login("canceller", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&token, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = booking_id(&created);

    let response = transition(&app, &token, &id, "canceled").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["booking"]["status"], "canceled");
}

#[tokio::test]
async fn test_student_cannot_approve() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("hopeful", "password123", "student").await;
    let token = app.login("hopeful", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&token, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = booking_id(&created);

    let response = transition(&app, &token, &id, "approved").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_cannot_cancel_someone_elses_booking() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("victim", "password123", "student").await;
    app.create_test_user("meddler", "password123", "student").await;
    let victim = app.login("victim", "password123").await;
    let meddler = app.login("meddler", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&victim, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let id = booking_id(&created);

    let response = transition(&app, &meddler, &id, "canceled").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_canceling_waitlisted_booking_does_not_promote() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder2", "password123", "student").await;
    app.create_test_user("quitter", "password123", "student").await;
    app.create_test_user("patient", "password123", "student").await;
    let holder = app.login("holder2", "password123").await;
    let quitter = app.login("quitter", "password123").await;
    let patient = app.login("patient", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    app.submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let wait1 = app
        .submit_booking(&quitter, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    let wait1_id = booking_id(&wait1);
    let wait2 = app
        .submit_booking(&patient, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    let wait2_id = booking_id(&wait2);

    // Leaving the waitlist frees nothing, so nobody is promoted.
    let response = transition(&app, &quitter, &wait1_id, "canceled").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body["data"]["promoted"].is_null());

    let remaining = app
        .request(
            "GET",
            &format!("/api/bookings/{wait2_id}"),
            None,
            Some(&patient),
        )
        .await;
    assert_eq!(remaining.body["data"]["status"], "pending");
    assert_eq!(remaining.body["data"]["waitlist_position"], 2);
}

#[tokio::test]
async fn test_transition_unknown_booking() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin2", "password123", "admin").await;
    let admin = app.login("admin2", "password123").await;

    let response = transition(&app, &admin, &uuid::Uuid::new_v4().to_string(), "approved").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancellation_of_approved_booking_promotes() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("holder3", "password123", "student").await;
    app.create_test_user("waiter", "password123", "student").await;
    app.create_test_user("admin3", "password123", "admin").await;
    let holder = app.login("holder3", "password123").await;
    let waiter = app.login("waiter", "password123").await;
    let admin = app.login("admin3", "password123").await;
    let facility = app.create_facility("Court", "08:00", "12:00").await;

    let primary = app
        .submit_booking(&holder, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let primary_id = booking_id(&primary);
    app.submit_booking(&waiter, facility, "2030-06-03", "08:00", "09:00", true)
        .await;

    transition(&app, &admin, &primary_id, "approved").await;
    let response = transition(&app, &holder, &primary_id, "canceled").await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["promoted"]["status"], "pending");
}
