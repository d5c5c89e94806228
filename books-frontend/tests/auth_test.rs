mod common;

use common::{TEST_USERNAME, TestApp};

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/customers", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"], "Not logged in");
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/login", app.address))
        .json(&serde_json::json!({
            "username": TEST_USERNAME,
            "password": "wrong",
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn blank_credentials_fail_validation() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/login", app.address))
        .json(&serde_json::json!({ "username": "", "password": "" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn login_grants_access_and_logout_revokes_it() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app
        .client
        .get(format!("{}/session", app.address))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["username"], TEST_USERNAME);

    let response = app
        .client
        .post(format!("{}/logout", app.address))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status().as_u16(), 204);

    let response = app
        .client
        .get(format!("{}/session", app.address))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn session_survives_multiple_requests() {
    let app = TestApp::spawn().await;
    app.login().await;

    for _ in 0..3 {
        let response = app
            .client
            .get(format!("{}/session", app.address))
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status().as_u16(), 200);
    }
}
