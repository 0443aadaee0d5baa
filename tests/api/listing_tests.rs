//! Listing Form Tests

use chrono::Utc;
use pretty_assertions::assert_eq;

use crate::common::{body_text, TestApp};

#[tokio::test]
async fn test_create_listing_then_duplicate_title_fails() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let first = app.create_listing("My Place", "50", "ann@x.com").await;
    assert!(first.contains("Listing Created."));

    let second = app.create_listing("My Place", "60", "ann@x.com").await;
    assert!(second.contains("Listing Creation Failed: Title already in use"));

    let stored = app.store.listing("My Place").unwrap();
    assert_eq!(stored.price, 50);
    assert_eq!(stored.owner_id, app.store.user("ann@x.com").unwrap().id);
}

#[tokio::test]
async fn test_create_listing_price_must_be_integer() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let body = app.create_listing("My Place", "fifty", "ann@x.com").await;

    assert!(body.contains("Please enter an integer for price."));
    assert!(app.store.listing("My Place").is_none());
}

#[tokio::test]
async fn test_create_listing_for_unknown_owner_fails() {
    let app = TestApp::new();

    let body = app.create_listing("My Place", "50", "ghost@x.com").await;

    assert!(body.contains("Listing Creation Failed: Owner not found"));
}

#[tokio::test]
async fn test_create_listing_outside_date_window_fails() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let response = app
        .post_form(
            "/create_listing",
            &[
                ("title", "Old Place"),
                ("description", "A nice cozy place to stay for a while"),
                ("price", "50"),
                ("last_modified_date", "2025-01-03"),
                ("email", "ann@x.com"),
            ],
        )
        .await;

    assert!(body_text(response).await.contains("Listing Creation Failed"));
    assert!(app.store.listing("Old Place").is_none());
}

#[tokio::test]
async fn test_update_listing_price_is_monotonic() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;
    app.create_listing("My Place", "1000", "ann@x.com").await;

    let raised = app
        .post_form(
            "/update_listing",
            &[("email", "ann@x.com"), ("price", "2000")],
        )
        .await;
    assert!(body_text(raised).await.contains("Listing Updated."));

    let listing = app.store.listing("My Place").unwrap();
    assert_eq!(listing.price, 2000);
    assert_eq!(listing.last_modified_date, Utc::now().date_naive());

    let lowered = app
        .post_form(
            "/update_listing",
            &[("email", "ann@x.com"), ("price", "1500")],
        )
        .await;
    assert!(body_text(lowered).await.contains("Listing Update Failed"));
    assert_eq!(app.store.listing("My Place").unwrap().price, 2000);
}

#[tokio::test]
async fn test_update_listing_by_title_and_rename() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;
    app.create_listing("First Place", "100", "ann@x.com").await;
    app.create_listing("Second Place", "100", "ann@x.com").await;

    let response = app
        .post_form(
            "/update_listing",
            &[
                ("email", "ann@x.com"),
                ("listing_title", "Second Place"),
                ("title", "Renamed Place"),
            ],
        )
        .await;

    assert!(body_text(response).await.contains("Listing Updated."));
    assert!(app.store.listing("Second Place").is_none());
    assert!(app.store.listing("Renamed Place").is_some());
    assert!(app.store.listing("First Place").is_some());
}

#[tokio::test]
async fn test_update_listing_of_another_owner_fails() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;
    app.register("bob", "bob@x.com", "Ab1!cd").await;
    app.create_listing("My Place", "100", "ann@x.com").await;

    let response = app
        .post_form(
            "/update_listing",
            &[
                ("email", "bob@x.com"),
                ("listing_title", "My Place"),
                ("price", "500"),
            ],
        )
        .await;

    assert!(body_text(response)
        .await
        .contains("Listing Update Failed: Listing not found"));
    assert_eq!(app.store.listing("My Place").unwrap().price, 100);
}

#[tokio::test]
async fn test_update_listing_rejects_bad_title_and_price_range() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;
    app.create_listing("My Place", "1000", "ann@x.com").await;
    let before = app.store.listing("My Place").unwrap();

    for fields in [
        [("email", "ann@x.com"), ("title", "./csa.")],
        [("email", "ann@x.com"), ("price", "20000")],
    ] {
        let response = app.post_form("/update_listing", &fields).await;
        assert!(body_text(response).await.contains("Listing Update Failed"));
    }

    let after = app.store.listing("My Place").unwrap();
    assert_eq!(after.title, before.title);
    assert_eq!(after.price, 1000);
    assert_eq!(after.last_modified_date, before.last_modified_date);
    assert!(app.store.listing("./csa.").is_none());
}
