//! HTTP client for the remote bookkeeping API.
//!
//! The backend speaks a PHP-style dialect: one `.php` endpoint per resource,
//! `GET` for reads (whole collections, or `?id=` for one record), `POST` with
//! an `action` parameter for writes. Responses are `200` with the JSON body,
//! `{"error": string}`, or, when the server itself breaks, non-JSON text.
//! Every response goes through the same classification pipeline; nothing is
//! trusted straight off the wire.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, instrument};

use frontend_core::observability::metrics::UPSTREAM_REQUESTS_TOTAL;

use crate::error::ApiError;
use crate::legacy;
use crate::models::{
    AccountStatement, CompanySettings, Contact, ContactInput, ContactKind, DocumentSettings,
    Invoice, InvoiceInput, InvoiceKind, PaymentInput, PaymentVoucher, Product, ProductInput,
    Quotation, QuotationInput, Receipt, User, UserInput,
};

#[derive(Clone)]
pub struct BooksApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BooksApiClient {
    /// Build a client for the given API base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Fetch and decode a JSON response.
    ///
    /// `what` names the resource for 404s and log lines.
    #[instrument(skip(self, query), fields(endpoint = %endpoint))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, ApiError> {
        let result = self.request_json(endpoint, query, None::<&()>, what).await;
        self.record_outcome(endpoint, &result);
        result
    }

    /// POST an `action` with a JSON body and decode the response.
    #[instrument(skip(self, query, body), fields(endpoint = %endpoint, action = %action))]
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        action: &str,
        query: &[(&str, String)],
        body: &B,
        what: &str,
    ) -> Result<T, ApiError> {
        let mut query: Vec<(&str, String)> = query.to_vec();
        query.push(("action", action.to_string()));
        let result = self.request_json(endpoint, &query, Some(body), what).await;
        self.record_outcome(endpoint, &result);
        result
    }

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        what: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let request = match body {
            Some(b) => self.http.post(&url).query(query).json(b),
            None => self.http.get(&url).query(query),
        };

        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "Request to bookkeeping API failed");
            ApiError::from(e)
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                what: what.to_string(),
            });
        }

        let text = response.text().await?;
        decode_body(&text)
    }

    fn record_outcome<T>(&self, endpoint: &str, result: &Result<T, ApiError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        UPSTREAM_REQUESTS_TOTAL
            .with_label_values(&[endpoint, outcome])
            .inc();
    }

    /// Connectivity re-check for the diagnostics screen. Any decodable JSON
    /// answer counts as reachable.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let _: Value = self.get_json("ping.php", &[], "ping").await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Contacts (customers and suppliers share a shape)
    // -------------------------------------------------------------------------

    fn contact_endpoint(kind: ContactKind) -> &'static str {
        match kind {
            ContactKind::Customer => "customers.php",
            ContactKind::Supplier => "suppliers.php",
        }
    }

    pub async fn contacts(&self, kind: ContactKind) -> Result<Vec<Contact>, ApiError> {
        self.get_json(Self::contact_endpoint(kind), &[], kind.as_str())
            .await
    }

    pub async fn contact(&self, kind: ContactKind, id: i64) -> Result<Contact, ApiError> {
        self.get_json(
            Self::contact_endpoint(kind),
            &[("id", id.to_string())],
            kind.as_str(),
        )
        .await
    }

    pub async fn create_contact(
        &self,
        kind: ContactKind,
        input: &ContactInput,
    ) -> Result<Contact, ApiError> {
        self.post_json(Self::contact_endpoint(kind), "create", &[], input, kind.as_str())
            .await
    }

    pub async fn update_contact(
        &self,
        kind: ContactKind,
        id: i64,
        input: &ContactInput,
    ) -> Result<Contact, ApiError> {
        self.post_json(
            Self::contact_endpoint(kind),
            "update",
            &[("id", id.to_string())],
            input,
            kind.as_str(),
        )
        .await
    }

    pub async fn delete_contact(&self, kind: ContactKind, id: i64) -> Result<(), ApiError> {
        self.delete(Self::contact_endpoint(kind), id, kind.as_str()).await
    }

    // -------------------------------------------------------------------------
    // Account statements (read-only views)
    // -------------------------------------------------------------------------

    /// Fetch the account statement for a contact. The statement is validated
    /// at the boundary; its entry balances are recomputed by the caller, not
    /// trusted from the wire.
    pub async fn statement(
        &self,
        kind: ContactKind,
        contact_id: i64,
    ) -> Result<AccountStatement, ApiError> {
        let (endpoint, id_param) = match kind {
            ContactKind::Customer => ("account_statement.php", "customer_id"),
            ContactKind::Supplier => ("supplier_account_statement.php", "supplier_id"),
        };
        let statement: AccountStatement = self
            .get_json(endpoint, &[(id_param, contact_id.to_string())], "statement")
            .await?;
        statement.validate()?;
        Ok(statement)
    }

    // -------------------------------------------------------------------------
    // Quotations
    // -------------------------------------------------------------------------

    pub async fn quotations(&self) -> Result<Vec<Quotation>, ApiError> {
        self.get_json("quotations.php", &[], "quotation").await
    }

    pub async fn quotation(&self, id: i64) -> Result<Quotation, ApiError> {
        self.get_json("quotations.php", &[("id", id.to_string())], "quotation")
            .await
    }

    pub async fn create_quotation(&self, input: &QuotationInput) -> Result<Quotation, ApiError> {
        self.post_json("quotations.php", "create", &[], input, "quotation")
            .await
    }

    pub async fn update_quotation(
        &self,
        id: i64,
        input: &QuotationInput,
    ) -> Result<Quotation, ApiError> {
        self.post_json(
            "quotations.php",
            "update",
            &[("id", id.to_string())],
            input,
            "quotation",
        )
        .await
    }

    pub async fn delete_quotation(&self, id: i64) -> Result<(), ApiError> {
        self.delete("quotations.php", id, "quotation").await
    }

    // -------------------------------------------------------------------------
    // Invoices (sales and purchase)
    // -------------------------------------------------------------------------

    fn invoice_endpoint(kind: InvoiceKind) -> &'static str {
        match kind {
            InvoiceKind::Sales => "sales_invoices.php",
            InvoiceKind::Purchase => "purchase_invoices.php",
        }
    }

    pub async fn invoices(&self, kind: InvoiceKind) -> Result<Vec<Invoice>, ApiError> {
        self.get_json(Self::invoice_endpoint(kind), &[], "invoice").await
    }

    pub async fn invoice(&self, kind: InvoiceKind, id: i64) -> Result<Invoice, ApiError> {
        self.get_json(
            Self::invoice_endpoint(kind),
            &[("id", id.to_string())],
            "invoice",
        )
        .await
    }

    pub async fn create_invoice(
        &self,
        kind: InvoiceKind,
        input: &InvoiceInput,
    ) -> Result<Invoice, ApiError> {
        self.post_json(Self::invoice_endpoint(kind), "create", &[], input, "invoice")
            .await
    }

    pub async fn update_invoice(
        &self,
        kind: InvoiceKind,
        id: i64,
        input: &InvoiceInput,
    ) -> Result<Invoice, ApiError> {
        self.post_json(
            Self::invoice_endpoint(kind),
            "update",
            &[("id", id.to_string())],
            input,
            "invoice",
        )
        .await
    }

    pub async fn delete_invoice(&self, kind: InvoiceKind, id: i64) -> Result<(), ApiError> {
        self.delete(Self::invoice_endpoint(kind), id, "invoice").await
    }

    // -------------------------------------------------------------------------
    // Payments: receipts in, payment vouchers out
    // -------------------------------------------------------------------------

    pub async fn receipts(&self) -> Result<Vec<Receipt>, ApiError> {
        self.get_json("receipts.php", &[], "receipt").await
    }

    pub async fn receipt(&self, id: i64) -> Result<Receipt, ApiError> {
        self.get_json("receipts.php", &[("id", id.to_string())], "receipt")
            .await
    }

    pub async fn create_receipt(&self, input: &PaymentInput) -> Result<Receipt, ApiError> {
        self.post_json("receipts.php", "create", &[], input, "receipt")
            .await
    }

    pub async fn delete_receipt(&self, id: i64) -> Result<(), ApiError> {
        self.delete("receipts.php", id, "receipt").await
    }

    pub async fn payment_vouchers(&self) -> Result<Vec<PaymentVoucher>, ApiError> {
        self.get_json("payment_vouchers.php", &[], "payment voucher").await
    }

    pub async fn payment_voucher(&self, id: i64) -> Result<PaymentVoucher, ApiError> {
        self.get_json(
            "payment_vouchers.php",
            &[("id", id.to_string())],
            "payment voucher",
        )
        .await
    }

    pub async fn create_payment_voucher(
        &self,
        input: &PaymentInput,
    ) -> Result<PaymentVoucher, ApiError> {
        self.post_json("payment_vouchers.php", "create", &[], input, "payment voucher")
            .await
    }

    pub async fn delete_payment_voucher(&self, id: i64) -> Result<(), ApiError> {
        self.delete("payment_vouchers.php", id, "payment voucher").await
    }

    // -------------------------------------------------------------------------
    // Product catalog
    // -------------------------------------------------------------------------

    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("products.php", &[], "product").await
    }

    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json("products.php", &[("id", id.to_string())], "product")
            .await
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.post_json("products.php", "create", &[], input, "product")
            .await
    }

    pub async fn update_product(&self, id: i64, input: &ProductInput) -> Result<Product, ApiError> {
        self.post_json(
            "products.php",
            "update",
            &[("id", id.to_string())],
            input,
            "product",
        )
        .await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete("products.php", id, "product").await
    }

    // -------------------------------------------------------------------------
    // Users and roles
    // -------------------------------------------------------------------------

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users.php", &[], "user").await
    }

    pub async fn user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json("users.php", &[("id", id.to_string())], "user").await
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User, ApiError> {
        self.post_json("users.php", "create", &[], input, "user").await
    }

    pub async fn update_user(&self, id: i64, input: &UserInput) -> Result<User, ApiError> {
        self.post_json("users.php", "update", &[("id", id.to_string())], input, "user")
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete("users.php", id, "user").await
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    pub async fn company_settings(&self) -> Result<CompanySettings, ApiError> {
        self.get_json(
            "settings.php",
            &[("section", "company".to_string())],
            "company settings",
        )
        .await
    }

    pub async fn update_company_settings(
        &self,
        input: &CompanySettings,
    ) -> Result<CompanySettings, ApiError> {
        self.post_json(
            "settings.php",
            "update",
            &[("section", "company".to_string())],
            input,
            "company settings",
        )
        .await
    }

    pub async fn document_settings(&self) -> Result<DocumentSettings, ApiError> {
        self.get_json(
            "settings.php",
            &[("section", "documents".to_string())],
            "document settings",
        )
        .await
    }

    pub async fn update_document_settings(
        &self,
        input: &DocumentSettings,
    ) -> Result<DocumentSettings, ApiError> {
        self.post_json(
            "settings.php",
            "update",
            &[("section", "documents".to_string())],
            input,
            "document settings",
        )
        .await
    }

    // -------------------------------------------------------------------------

    /// Shared delete: the backend acknowledges with `{"success": true}`.
    async fn delete(&self, endpoint: &str, id: i64, what: &str) -> Result<(), ApiError> {
        let ack: Ack = self
            .post_json(endpoint, "delete", &[("id", id.to_string())], &Value::Null, what)
            .await?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Api(format!("server did not acknowledge {what} delete")))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct Ack {
    success: bool,
}

/// Classification pipeline for a raw response body.
///
/// Order matters: non-JSON text is checked against the hosting challenge
/// fingerprint before being declared malformed, and an explicit `error`
/// field wins over schema decoding.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            if legacy::looks_like_hosting_challenge(body) {
                return Err(ApiError::HostingChallenge);
            }
            return Err(ApiError::Malformed {
                detail: e.to_string(),
            });
        }
    };

    if let Some(msg) = value.get("error").and_then(Value::as_str) {
        return Err(ApiError::Api(msg.to_string()));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Malformed {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_classifies_challenge_before_malformed() {
        let body = "<html><script src=\"aes.js\"></script><script>document.cookie=\"x\"</script>";
        let err = decode_body::<Value>(body).unwrap_err();
        assert!(matches!(err, ApiError::HostingChallenge));
    }

    #[test]
    fn decode_flags_plain_garbage_as_malformed() {
        let err = decode_body::<Value>("Fatal error: Uncaught PDOException").unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }

    #[test]
    fn decode_passes_error_field_through() {
        let err = decode_body::<Value>(r#"{"error":"no such customer"}"#).unwrap_err();
        match err {
            ApiError::Api(msg) => assert_eq!(msg, "no such customer"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_schema_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Expect {
            #[allow(dead_code)]
            id: i64,
        }
        let err = decode_body::<Expect>(r#"{"id":"not-a-number"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }
}
