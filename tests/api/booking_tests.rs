//! Booking Form Tests

use pretty_assertions::assert_eq;

use crate::common::{body_text, TestApp};

async fn book(app: &TestApp, email: &str, title: &str, start: &str, end: &str) -> String {
    let response = app
        .post_form(
            "/create_booking",
            &[
                ("user_email", email),
                ("listing_title", title),
                ("start_date", start),
                ("end_date", end),
            ],
        )
        .await;
    body_text(response).await
}

async fn marketplace() -> TestApp {
    let app = TestApp::new();
    app.register("owner", "owner@x.com", "Ab1!cd").await;
    app.register("guest", "guest@x.com", "Ab1!cd").await;
    app.create_listing("Lake House", "60", "owner@x.com").await;
    app
}

#[tokio::test]
async fn test_booking_moves_price_from_booker_to_owner() {
    let app = marketplace().await;

    let body = book(&app, "guest@x.com", "Lake House", "2022-07-05", "2022-07-08").await;

    assert!(body.contains("Booking Created."));
    assert_eq!(app.store.user("guest@x.com").unwrap().balance, 40);
    assert_eq!(app.store.user("owner@x.com").unwrap().balance, 160);
    assert_eq!(app.store.booking_count(), 1);
}

#[tokio::test]
async fn test_owner_cannot_book_own_listing() {
    let app = marketplace().await;

    let body = book(&app, "owner@x.com", "Lake House", "2022-07-05", "2022-07-08").await;

    assert!(body.contains("Booking Creation Failed: You cannot book your own listing"));
    assert_eq!(app.store.booking_count(), 0);
}

#[tokio::test]
async fn test_booking_requires_balance() {
    let app = marketplace().await;
    app.store.set_balance("guest@x.com", 59);

    let body = book(&app, "guest@x.com", "Lake House", "2022-07-05", "2022-07-08").await;

    assert!(body.contains("Booking Creation Failed"));
    assert_eq!(app.store.user("guest@x.com").unwrap().balance, 59);
    assert_eq!(app.store.user("owner@x.com").unwrap().balance, 100);
}

#[tokio::test]
async fn test_overlapping_booking_rejected() {
    let app = marketplace().await;
    app.register("third", "third@x.com", "Ab1!cd").await;
    book(&app, "guest@x.com", "Lake House", "2022-07-05", "2022-07-08").await;

    let clash = book(&app, "third@x.com", "Lake House", "2022-07-08", "2022-07-10").await;
    assert!(clash.contains("Booking Creation Failed: The listing is already booked for"));

    let after = book(&app, "third@x.com", "Lake House", "2022-07-09", "2022-07-10").await;
    assert!(after.contains("Booking Created."));
    assert_eq!(app.store.booking_count(), 2);
}

#[tokio::test]
async fn test_booking_with_reversed_dates_rejected() {
    let app = marketplace().await;

    let body = book(&app, "guest@x.com", "Lake House", "2022-07-08", "2022-07-05").await;

    assert!(body.contains("Booking Creation Failed"));
    assert_eq!(app.store.booking_count(), 0);
}
