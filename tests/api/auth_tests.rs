//! Authentication Form Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::{body_text, location, session_cookie, TestApp};

#[tokio::test]
async fn test_login_page_prompts() {
    let app = TestApp::new();

    let response = app.get("/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Please login"));
}

#[tokio::test]
async fn test_register_with_valid_data() {
    let app = TestApp::new();

    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let user = app.store.user("ann@x.com").expect("user stored");
    assert_eq!(user.username, "ann");
    assert_eq!(user.balance, 100);
    assert_eq!(user.billing_address, "");
    assert_eq!(user.postal_code, "");
}

#[tokio::test]
async fn test_register_with_mismatched_passwords() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/register",
            &[
                ("name", "ann"),
                ("email", "ann@x.com"),
                ("password", "Ab1!cd"),
                ("password2", "Ab1!ce"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("The passwords do not match"));
    assert!(app.store.user("ann@x.com").is_none());
}

#[tokio::test]
async fn test_register_rejects_bad_fields() {
    let app = TestApp::new();

    for (name, email, password) in [
        ("ann", "ann@xcom", "Ab1!cd"),
        ("ann", "ann@x.com", "ab1!cd"),
        ("an", "ann@x.com", "Ab1!cd"),
        ("ann!", "ann@x.com", "Ab1!cd"),
    ] {
        let response = app
            .post_form(
                "/register",
                &[
                    ("name", name),
                    ("email", email),
                    ("password", password),
                    ("password2", password),
                ],
            )
            .await;
        assert!(body_text(response).await.contains("Registration failed"));
    }
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("name", "another"),
                ("email", "ann@x.com"),
                ("password", "Ab1!cd"),
                ("password2", "Ab1!cd"),
            ],
        )
        .await;

    let body = body_text(response).await;
    assert!(body.contains("Registration failed: Email already registered"));
}

#[tokio::test]
async fn test_login_sets_session_and_opens_home() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let response = app
        .post_form("/login", &[("email", "ann@x.com"), ("password", "Ab1!cd")])
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/".to_string()));
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header")
        .to_owned();
    assert!(set_cookie.contains("Max-Age=3600"));
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = session_cookie(&response).expect("session cookie");
    assert!(cookie.starts_with("marketplace_session="));

    let home = app.get_with_cookie("/", &cookie).await;
    assert_eq!(home.status(), StatusCode::OK);
    let body = body_text(home).await;
    assert!(body.contains("Welcome ann!"));
    assert!(body.contains(r#"<span id="balance">100</span>"#));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::new();
    app.register("ann", "ann@x.com", "Ab1!cd").await;

    let response = app
        .post_form("/login", &[("email", "ann@x.com"), ("password", "Ab1!cdX")])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    assert!(body_text(response).await.contains("login failed"));
}

#[tokio::test]
async fn test_home_requires_session() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login".to_string()));

    let forged = app.get_with_cookie("/", "marketplace_session=forged").await;
    assert_eq!(location(&forged), Some("/login".to_string()));
}

#[tokio::test]
async fn test_session_for_unknown_user_redirects() {
    let app = TestApp::new();
    let token = app.sessions.issue("ghost@x.com").unwrap();

    let response = app
        .get_with_cookie("/", &format!("marketplace_session={}", token))
        .await;

    assert_eq!(location(&response), Some("/login".to_string()));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let token = app.sessions.issue("ann@x.com").unwrap();

    let response = app
        .get_with_cookie("/logout", &format!("marketplace_session={}", token))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/".to_string()));
    let cleared = session_cookie(&response).expect("removal cookie");
    assert_eq!(cleared, "marketplace_session=");
}
