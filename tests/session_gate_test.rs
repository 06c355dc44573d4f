//! Login, logout and the navigation gate.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inbox_copilot::auth::Session;
use inbox_copilot::pages::login::INVALID_CREDENTIALS;
use inbox_copilot::shell::Route;
use serde_json::json;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_protected_route_without_session_redirects() {
    let (mut app, http) = TestAppBuilder::new().build().await;

    app.navigate(Route::Dashboard);

    assert_eq!(app.route, Route::Login);
    assert!(http.get_requests().is_empty());
}

#[tokio::test]
async fn test_protected_route_with_session_fetches() {
    let (mut app, http) = TestAppBuilder::new().logged_in().build().await;

    app.navigate(Route::Contacts);
    drain(&mut app, 1).await;

    assert_eq!(app.route, Route::Contacts);
    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, url("/contacts"));
}

#[tokio::test]
async fn test_logout_then_navigation_redirects() {
    let store = InMemorySessionStore::with_session(Session::with_token(TEST_TOKEN));
    let (mut app, http) = TestAppBuilder::new().with_store(store.clone()).build().await;
    app.navigate(Route::Contacts);
    drain(&mut app, 1).await;

    app.handle_key(key(KeyCode::Char('L')));
    assert_eq!(app.route, Route::Login);
    assert!(!app.session.is_authenticated());

    // LoggedOut
    drain(&mut app, 1).await;
    assert!(store.get_session().is_none());

    http.clear_requests();
    app.navigate(Route::Tasks);
    assert_eq!(app.route, Route::Login);
    assert!(http.get_requests().is_empty());
}

#[tokio::test]
async fn test_dropped_token_redirects_next_mount() {
    let (mut app, http) = TestAppBuilder::new().logged_in().build().await;
    app.navigate(Route::Today);
    drain(&mut app, 1).await;

    app.session.forget();
    http.clear_requests();
    app.navigate(Route::Calendar);

    assert_eq!(app.route, Route::Login);
    assert!(http.get_requests().is_empty());
}

#[tokio::test]
async fn test_login_form_submits_and_lands_on_dashboard() {
    let store = InMemorySessionStore::new();
    let (mut app, http) = TestAppBuilder::new().with_store(store.clone()).build().await;
    http.set_response("POST", &url("/auth/login"), MockResponse::json(200, token_json("fresh")));

    for c in "agent@example.com".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Tab));
    for c in "hunter2".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert!(app.login.submitting);

    // LoginFinished
    drain(&mut app, 1).await;
    assert_eq!(app.route, Route::Dashboard);
    assert_eq!(app.session.token().as_deref(), Some("fresh"));
    assert_eq!(store.get_session().unwrap().access_token.as_deref(), Some("fresh"));

    let login = &http.requests_for("POST")[0];
    assert_eq!(
        login.body.as_deref(),
        Some("username=agent%40example.com&password=hunter2")
    );
    assert!(bearer(login).is_none());

    // Dashboard fetch carries the new token
    drain(&mut app, 1).await;
    for request in http.requests_for("GET") {
        assert_eq!(bearer(&request), Some("Bearer fresh"));
    }
}

#[tokio::test]
async fn test_failed_login_shows_invalid_credentials() {
    let (mut app, http) = TestAppBuilder::new().build().await;
    http.set_response(
        "POST",
        &url("/auth/login"),
        MockResponse::json(401, json!({"detail": "Incorrect email or password"})),
    );

    app.login.email = "agent@example.com".to_string();
    app.login.password = "wrong".to_string();
    app.submit_login();
    drain(&mut app, 1).await;

    assert_eq!(app.route, Route::Login);
    assert_eq!(app.login.error.as_deref(), Some(INVALID_CREDENTIALS));
    assert!(!app.login.submitting);
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn test_login_with_empty_field_sends_nothing() {
    let (mut app, http) = TestAppBuilder::new().build().await;
    app.login.email = "agent@example.com".to_string();

    app.submit_login();

    assert!(!app.login.submitting);
    assert!(http.get_requests().is_empty());
}
