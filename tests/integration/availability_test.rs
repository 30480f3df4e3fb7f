//! Integration tests for the availability grid and facility management.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_empty_day_shows_full_grid() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student1", "password123", "student")
        .await;
    let token = app.login("student1", "password123").await;
    let facility = app.create_facility("Tennis Court A", "08:00", "22:00").await;

    let response = app
        .request(
            "GET",
            &format!("/api/facilities/{facility}/availability?date=2030-06-03"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let slots = response.body["data"]["slots"].as_array().expect("slots");
    assert_eq!(slots.len(), 14);
    assert_eq!(slots[0]["start_time"], "08:00");
    assert_eq!(slots[0]["end_time"], "09:00");
    assert!(slots.iter().all(|s| s["is_available"] == true));
    assert!(slots.iter().all(|s| s["waitlist_count"] == 0));
}

#[tokio::test]
async fn test_booked_slot_marked_unavailable() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("booker", "password123", "student").await;
    app.create_test_user("viewer", "password123", "student").await;
    let booker = app.login("booker", "password123").await;
    let viewer = app.login("viewer", "password123").await;
    let facility = app.create_facility("Gym Hall", "08:00", "12:00").await;

    let created = app
        .submit_booking(&booker, facility, "2030-06-03", "09:00", "10:00", false)
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);

    let response = app
        .request(
            "GET",
            &format!("/api/facilities/{facility}/availability?date=2030-06-03"),
            None,
            Some(&viewer),
        )
        .await;

    let slots = response.body["data"]["slots"].as_array().expect("slots");
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0]["is_available"], true);
    assert_eq!(slots[1]["is_available"], false);
    assert_eq!(slots[2]["is_available"], true);
}

#[tokio::test]
async fn test_waitlist_count_reflected_in_grid() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("first", "password123", "student").await;
    app.create_test_user("second", "password123", "student").await;
    let first = app.login("first", "password123").await;
    let second = app.login("second", "password123").await;
    let facility = app.create_facility("Pool", "08:00", "12:00").await;

    app.submit_booking(&first, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let waitlisted = app
        .submit_booking(&second, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    assert_eq!(waitlisted.status, StatusCode::CREATED);

    let response = app
        .request(
            "GET",
            &format!("/api/facilities/{facility}/availability?date=2030-06-03"),
            None,
            Some(&first),
        )
        .await;

    let slots = response.body["data"]["slots"].as_array().expect("slots");
    assert_eq!(slots[0]["is_available"], false);
    assert_eq!(slots[0]["waitlist_count"], 1);
}

#[tokio::test]
async fn test_unknown_facility_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student2", "password123", "student")
        .await;
    let token = app.login("student2", "password123").await;

    let response = app
        .request(
            "GET",
            &format!(
                "/api/facilities/{}/availability?date=2030-06-03",
                uuid::Uuid::new_v4()
            ),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grid_served_for_unavailable_facility() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student3", "password123", "student")
        .await;
    let token = app.login("student3", "password123").await;
    let facility = app
        .create_facility_with_availability("Closed Court", "08:00", "22:00", false)
        .await;

    // The flag gates submission, not the read-only grid.
    let response = app
        .request(
            "GET",
            &format!("/api/facilities/{facility}/availability?date=2030-06-03"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["slots"].as_array().expect("slots").len(), 14);

    // Submission against the same facility is still rejected.
    let response = app
        .submit_booking(&token, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "FACILITY_UNAVAILABLE");
}

#[tokio::test]
async fn test_admin_creates_facility() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "password123", "admin").await;
    let token = app.login("admin", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/facilities",
            Some(serde_json::json!({
                "name": "New Court",
                "location": "South Campus",
                "capacity": 2,
                "operating_hours": { "open": "07:00", "close": "21:00" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["operating_hours"]["open"], "07:00");
    assert_eq!(response.body["data"]["availability"], true);
}

#[tokio::test]
async fn test_student_cannot_create_facility() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student4", "password123", "student")
        .await;
    let token = app.login("student4", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/facilities",
            Some(serde_json::json!({
                "name": "Rogue Court",
                "location": "Nowhere",
                "capacity": 2,
                "operating_hours": { "open": "07:00", "close": "21:00" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_facility_with_malformed_hours_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin2", "password123", "admin").await;
    let token = app.login("admin2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/facilities",
            Some(serde_json::json!({
                "name": "Bad Hours",
                "location": "Campus",
                "capacity": 2,
                "operating_hours": { "open": "25:00", "close": "26:00" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_TIME_FORMAT");
}
