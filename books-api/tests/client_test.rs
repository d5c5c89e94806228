//! Client classification tests against a mock backend.

use std::time::Duration;

use books_api::models::ContactKind;
use books_api::{ApiError, BooksApiClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BooksApiClient {
    BooksApiClient::new(&server.uri(), Duration::from_secs(5)).expect("client builds")
}

fn statement_body() -> serde_json::Value {
    json!({
        "contact_id": 7,
        "contact_name": "Acme Trading",
        "contact_details": "12 Harbour Rd",
        "statement_date": "2024-02-01",
        "opening_balance": 0,
        "entries": [
                {
                "date": "2024-01-05",
                "transaction_id": "INV-001",
                "description": "Invoice INV-001",
                "debit": 100,
                "credit": 0,
                "balance": 0
            },
            {
                "date": "2024-01-10",
                "transaction_id": "RCT-001",
                "description": "Receipt RCT-001",
                "debit": 0,
                "credit": 40,
                "balance": 0
            }
        ],
        "currency": { "code": "USD", "symbol": "$" }
    })
}

#[tokio::test]
async fn fetches_and_decodes_a_customer_statement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .and(query_param("customer_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statement_body()))
        .mount(&server)
        .await;

    let statement = client_for(&server)
        .statement(ContactKind::Customer, 7)
        .await
        .expect("statement decodes");

    assert_eq!(statement.contact_id, 7);
    assert_eq!(statement.entries.len(), 2);
    assert_eq!(statement.currency.symbol, "$");
}

#[tokio::test]
async fn supplier_statements_use_the_supplier_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/supplier_account_statement.php"))
        .and(query_param("supplier_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statement_body()))
        .mount(&server)
        .await;

    let statement = client_for(&server)
        .statement(ContactKind::Supplier, 3)
        .await
        .expect("statement decodes");
    assert_eq!(statement.contact_name, "Acme Trading");
}

#[tokio::test]
async fn negative_amounts_fail_boundary_validation() {
    let mut body = statement_body();
    body["entries"][0]["debit"] = json!(-5);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account_statement.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .statement(ContactKind::Customer, 7)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Malformed { .. }));
}

#[tokio::test]
async fn http_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .contact(ContactKind::Customer, 99)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn explicit_error_field_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "customer not active"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).contacts(ContactKind::Customer).await.unwrap_err();
    match err {
        ApiError::Api(msg) => assert_eq!(msg, "customer not active"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn hosting_challenge_page_is_recognized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><script src=\"/aes.js\"></script>\
             <script>document.cookie = \"__challenge=1\";</script></html>",
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).ping().await.unwrap_err();
    assert!(matches!(err, ApiError::HostingChallenge));
}

#[tokio::test]
async fn php_fatal_error_text_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping.php"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Fatal error: Uncaught PDOException in db.php:12"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).ping().await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens here; the connection is refused immediately.
    let client = BooksApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}

#[tokio::test]
async fn delete_checks_the_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products.php"))
        .and(query_param("action", "delete"))
        .and(query_param("id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_product(4).await.unwrap_err();
    assert!(matches!(err, ApiError::Api(_)));
}
