//! Integration tests for booking submission, conflicts, and the waitlist.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_booking_conflict_and_waitlist_flow() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice", "password123", "student").await;
    app.create_test_user("bob", "password123", "student").await;
    app.create_test_user("carol", "password123", "student").await;
    app.create_test_user("dave", "password123", "student").await;
    let alice = app.login("alice", "password123").await;
    let bob = app.login("bob", "password123").await;
    let carol = app.login("carol", "password123").await;
    let dave = app.login("dave", "password123").await;
    let facility = app.create_facility("Squash Court", "08:00", "10:00").await;

    // Alice takes the 08:00 slot.
    let response = app
        .submit_booking(&alice, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "pending");
    assert!(response.body["data"]["waitlist_position"].is_null());

    // Bob hits the conflict and is offered the waitlist. The body does
    // not leak whose booking holds the slot.
    let response = app
        .submit_booking(&bob, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT, "{:?}", response.body);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "SLOT_CONFLICT");
    assert_eq!(response.body["conflict"], true);
    assert_eq!(response.body["waitlist_available"], true);
    assert!(response.body.get("user_id").is_none());

    // Bob resubmits opting into the waitlist.
    let response = app
        .submit_booking(&bob, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["waitlist_position"], 1);

    // Carol joins behind Bob.
    let response = app
        .submit_booking(&carol, facility, "2030-06-03", "08:00", "09:00", true)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["waitlist_position"], 2);

    // The adjacent slot is unaffected.
    let response = app
        .submit_booking(&dave, facility, "2030-06-03", "09:00", "10:00", false)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["data"]["waitlist_position"].is_null());
}

#[tokio::test]
async fn test_one_booking_per_day() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("greedy", "password123", "student").await;
    let token = app.login("greedy", "password123").await;
    let court = app.create_facility("Court One", "08:00", "12:00").await;
    let pool = app.create_facility("Pool One", "08:00", "12:00").await;

    let response = app
        .submit_booking(&token, court, "2030-06-03", "08:00", "09:00", false)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // Second booking on the same date, even at another facility, is rejected.
    let response = app
        .submit_booking(&token, pool, "2030-06-03", "10:00", "11:00", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    assert_eq!(response.body["error"], "DAILY_LIMIT_EXCEEDED");

    // A different date is fine.
    let response = app
        .submit_booking(&token, pool, "2030-06-04", "10:00", "11:00", false)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_times_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student1", "password123", "student")
        .await;
    let token = app.login("student1", "password123").await;
    let facility = app.create_facility("Track", "08:00", "22:00").await;

    for (start, end) in [("8am", "9am"), ("25:00", "26:00"), ("08:0", "09:0")] {
        let response = app
            .submit_booking(&token, facility, "2030-06-03", start, end, false)
            .await;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "{start}-{end}: {:?}",
            response.body
        );
        assert_eq!(response.body["error"], "INVALID_TIME_FORMAT");
    }
}

#[tokio::test]
async fn test_slot_shape_enforced() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student2", "password123", "student")
        .await;
    let token = app.login("student2", "password123").await;
    let facility = app.create_facility("Field", "08:00", "22:00").await;

    // Two hours.
    let response = app
        .submit_booking(&token, facility, "2030-06-03", "08:00", "10:00", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    // Half an hour.
    let response = app
        .submit_booking(&token, facility, "2030-06-03", "08:00", "08:30", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Off the hourly grid.
    let response = app
        .submit_booking(&token, facility, "2030-06-03", "08:30", "09:30", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Outside operating hours.
    let response = app
        .submit_booking(&token, facility, "2030-06-03", "22:00", "23:00", false)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unknown_facility() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("student3", "password123", "student")
        .await;
    let token = app.login("student3", "password123").await;

    let response = app
        .submit_booking(
            &token,
            uuid::Uuid::new_v4(),
            "2030-06-03",
            "08:00",
            "09:00",
            false,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_my_bookings() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("lister", "password123", "student").await;
    app.create_test_user("other", "password123", "student").await;
    let lister = app.login("lister", "password123").await;
    let other = app.login("other", "password123").await;
    let facility = app.create_facility("List Court", "08:00", "12:00").await;

    app.submit_booking(&lister, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    app.submit_booking(&lister, facility, "2030-06-04", "08:00", "09:00", false)
        .await;
    app.submit_booking(&other, facility, "2030-06-05", "08:00", "09:00", false)
        .await;

    let response = app
        .request("GET", "/api/bookings/me", None, Some(&lister))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body["data"].as_array().expect("bookings");
    assert_eq!(bookings.len(), 2);
}

#[tokio::test]
async fn test_booking_visibility() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("owner", "password123", "student").await;
    app.create_test_user("stranger", "password123", "student").await;
    app.create_test_user("admin", "password123", "admin").await;
    let owner = app.login("owner", "password123").await;
    let stranger = app.login("stranger", "password123").await;
    let admin = app.login("admin", "password123").await;
    let facility = app.create_facility("Private Court", "08:00", "12:00").await;

    let created = app
        .submit_booking(&owner, facility, "2030-06-03", "08:00", "09:00", false)
        .await;
    let booking_id = created.body["data"]["id"].as_str().expect("id").to_string();

    // Owner and admin can see the booking, a stranger cannot.
    let response = app
        .request("GET", &format!("/api/bookings/{booking_id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/bookings/{booking_id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&stranger),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_all_bookings() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin2", "password123", "admin").await;
    app.create_test_user("student4", "password123", "student")
        .await;
    let admin = app.login("admin2", "password123").await;
    let student = app.login("student4", "password123").await;
    let facility = app.create_facility("Admin Court", "08:00", "12:00").await;

    app.submit_booking(&student, facility, "2030-06-03", "08:00", "09:00", false)
        .await;

    let response = app.request("GET", "/api/bookings", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().expect("bookings").len(), 1);

    let response = app
        .request("GET", "/api/bookings", None, Some(&student))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
