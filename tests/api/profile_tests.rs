//! Profile Form Tests

use pretty_assertions::assert_eq;
use rental_marketplace::domain::UserRepository;

use crate::common::{body_text, TestApp};

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    app.register("user0", "test0@test.com", "123aB!").await;

    let response = app
        .post_form(
            "/update_profile",
            &[
                ("old_email", "test0@test.com"),
                ("new_email", "test123@test.com"),
                ("username", "user123"),
                ("billing_address", "88 My House"),
                ("postal_code", "C2C3B2"),
            ],
        )
        .await;

    assert!(body_text(response)
        .await
        .contains("User Profile has been updated."));
    assert!(app.store.user("test0@test.com").is_none());
    let user = app.store.user("test123@test.com").unwrap();
    assert_eq!(user.username, "user123");
    assert_eq!(user.billing_address, "88 My House");
    assert_eq!(user.postal_code, "C2C3B2");
}

#[tokio::test]
async fn test_update_profile_rejects_bad_postal_code_atomically() {
    let app = TestApp::new();
    app.register("user0", "test0@test.com", "123aB!").await;

    for postal_code in ["", "A!A1A1", "2B2C4", "D1A1A1"] {
        let response = app
            .post_form(
                "/update_profile",
                &[
                    ("old_email", "test0@test.com"),
                    ("username", "changed"),
                    ("postal_code", postal_code),
                ],
            )
            .await;
        assert!(body_text(response)
            .await
            .contains("User Profile update has failed"));
    }

    assert_eq!(app.store.user("test0@test.com").unwrap().username, "user0");
}

#[tokio::test]
async fn test_update_profile_email_taken() {
    let app = TestApp::new();
    app.register("user0", "test0@test.com", "123aB!").await;
    app.register("user1", "test1@test.com", "123aB!").await;

    let response = app
        .post_form(
            "/update_profile",
            &[
                ("old_email", "test0@test.com"),
                ("new_email", "test1@test.com"),
                ("postal_code", "K2B2C4"),
            ],
        )
        .await;

    assert!(body_text(response)
        .await
        .contains("User Profile update has failed: Email already registered"));
}

#[tokio::test]
async fn test_profile_write_leaves_balance_alone() {
    let app = TestApp::new();
    app.register("user0", "test0@test.com", "123aB!").await;

    // a booking settles between loading the profile and saving it
    let mut stale = app.store.user("test0@test.com").unwrap();
    app.store.set_balance("test0@test.com", 40);
    stale.billing_address = "88 My House".into();

    UserRepository::update(app.store.as_ref(), &stale).await.unwrap();

    let user = app.store.user("test0@test.com").unwrap();
    assert_eq!(user.billing_address, "88 My House");
    assert_eq!(user.balance, 40);
}
