mod common;

use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn statement_body() -> serde_json::Value {
    json!({
        "contact_id": 7,
        "contact_name": "Acme Trading",
        "contact_details": "Riyadh",
        "statement_date": "2024-01-01",
        "opening_balance": "100",
        "closing_balance": "999999",
        "currency": { "code": "SAR", "symbol": "SAR" },
        "entries": [
            // Server order with garbage per-entry balances; both must be
            // recomputed locally.
            { "date": "2024-01-05", "transaction_id": "INV-1", "description": "Invoice",
              "debit": "50", "credit": "0", "balance": "123456" },
            { "date": "2024-01-10", "transaction_id": "RCV-1", "description": "Receipt",
              "debit": "0", "credit": "90", "balance": "-1" }
        ]
    })
}

#[tokio::test]
async fn statement_recomputes_balances_and_sorts_newest_first() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .and(query_param("customer_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statement_body()))
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/customers/7/statement", app.address))
        .query(&[("start", "2024-01-01"), ("end", "2024-01-31")])
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");

    assert_eq!(body["contact_name"], "Acme Trading");
    assert_eq!(body["period_opening_balance"], "100");
    assert_eq!(body["total_debit"], "50");
    assert_eq!(body["total_credit"], "90");
    assert_eq!(body["closing_balance"], "60");

    // Newest first, with balances from the chronological walk.
    let entries = body["entries"].as_array().expect("entries missing");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["transaction_id"], "RCV-1");
    assert_eq!(entries[0]["balance"], "60");
    assert_eq!(entries[1]["transaction_id"], "INV-1");
    assert_eq!(entries[1]["balance"], "150");

    assert_eq!(body["display"]["closing"], "60.00 SAR");
}

#[tokio::test]
async fn statement_carries_earlier_entries_into_the_opening_balance() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .and(query_param("customer_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statement_body()))
        .mount(&app.backend)
        .await;

    // A window starting after INV-1 folds it into the opening balance.
    let response = app
        .client
        .get(format!("{}/customers/7/statement", app.address))
        .query(&[("start", "2024-01-06"), ("end", "2024-01-31")])
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["period_opening_balance"], "150");
    assert_eq!(body["closing_balance"], "60");
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn supplier_statements_hit_the_supplier_endpoint() {
    let app = TestApp::spawn().await;
    app.login().await;

    let mut body = statement_body();
    body["contact_id"] = json!(3);

    Mock::given(method("GET"))
        .and(path("/supplier_account_statement.php"))
        .and(query_param("supplier_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/suppliers/3/statement", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn omitted_start_reports_the_earliest_entry_date() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .and(query_param("customer_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statement_body()))
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/customers/7/statement", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");

    // No sentinel date leaks into the reported period; the math still
    // covers all history.
    assert_eq!(body["start"], "2024-01-05");
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["closing_balance"], "60");
}

#[tokio::test]
async fn inverted_date_range_is_a_bad_request() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app
        .client
        .get(format!("{}/customers/7/statement", app.address))
        .query(&[("start", "2024-02-01"), ("end", "2024-01-01")])
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn unknown_contact_maps_to_not_found() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/customers/999/statement", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn hosting_challenge_surfaces_as_bad_gateway() {
    let app = TestApp::spawn().await;
    app.login().await;

    let challenge =
        "<html><script src=\"/aes.js\"></script><script>document.cookie=\"t\";</script></html>";
    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(challenge))
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/customers/7/statement", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let message = body["error"].as_str().expect("error message missing");
    assert!(message.contains("browser-verification"), "got: {message}");
}
