mod common;

use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn invoice(id: i64, number: &str, contact: &str) -> serde_json::Value {
    json!({
        "id": id,
        "number": number,
        "contact_id": 1,
        "contact_name": contact,
        "date": "2024-03-01",
        "due_date": null,
        "status": "issued",
        "items": [
            { "id": 1, "product_id": null, "description": "Widget",
              "quantity": "2", "unit_price": "10", "tax_rate": "15", "total": "23" }
        ],
        "subtotal": "20",
        "tax_total": "3",
        "total": "23",
        "amount_paid": "0",
        "amount_due": "23",
        "notes": null
    })
}

#[tokio::test]
async fn sales_invoices_are_searchable_by_number() {
    let app = TestApp::spawn().await;
    app.login().await;

    let all = json!([
        invoice(1, "INV-2024-001", "Acme"),
        invoice(2, "INV-2024-002", "Globex"),
        invoice(3, "INV-2023-017", "Acme"),
    ]);

    Mock::given(method("GET"))
        .and(path("/sales_invoices.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(all))
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/sales-invoices", app.address))
        .query(&[("q", "inv-2024")])
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn an_invoice_needs_at_least_one_line_item() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app
        .client
        .post(format!("{}/sales-invoices", app.address))
        .json(&json!({
            "contact_id": 1,
            "date": "2024-03-01",
            "items": []
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn negative_line_amounts_are_rejected() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app
        .client
        .post(format!("{}/sales-invoices", app.address))
        .json(&json!({
            "contact_id": 1,
            "date": "2024-03-01",
            "items": [
                { "description": "Refund trick", "quantity": "1", "unit_price": "-10" }
            ]
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn purchase_invoices_use_their_own_endpoint() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("GET"))
        .and(path("/purchase_invoices.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .get(format!("{}/purchase-invoices", app.address))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn creating_a_sales_invoice_returns_the_backend_document() {
    let app = TestApp::spawn().await;
    app.login().await;

    Mock::given(method("POST"))
        .and(path("/sales_invoices.php"))
        .and(query_param("action", "create"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(invoice(10, "INV-2024-010", "Acme")),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .client
        .post(format!("{}/sales-invoices", app.address))
        .json(&json!({
            "contact_id": 1,
            "date": "2024-03-01",
            "items": [
                { "description": "Widget", "quantity": "2", "unit_price": "10", "tax_rate": "15" }
            ]
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["number"], "INV-2024-010");
}
