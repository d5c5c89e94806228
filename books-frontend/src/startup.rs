use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use frontend_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::AppState;
use crate::handlers::{
    app::{health_check, retest_connection},
    auth::{login_handler, logout_handler, session_info},
    catalog, contacts, invoices,
    metrics::metrics_handler,
    payments, quotations, settings, statements, users,
};
use crate::middleware::auth::auth_middleware;

pub fn build_router(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // behind TLS termination in deployment
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let protected = Router::new()
        .route("/session", get(session_info))
        .route("/retest", post(retest_connection))
        .route(
            "/customers",
            get(contacts::list_customers).post(contacts::create_customer),
        )
        .route(
            "/customers/:id",
            get(contacts::get_customer)
                .put(contacts::update_customer)
                .delete(contacts::delete_customer),
        )
        .route(
            "/customers/:id/statement",
            get(statements::customer_statement),
        )
        .route(
            "/customers/:id/statement/pdf",
            get(statements::customer_statement_pdf),
        )
        .route(
            "/suppliers",
            get(contacts::list_suppliers).post(contacts::create_supplier),
        )
        .route(
            "/suppliers/:id",
            get(contacts::get_supplier)
                .put(contacts::update_supplier)
                .delete(contacts::delete_supplier),
        )
        .route(
            "/suppliers/:id/statement",
            get(statements::supplier_statement),
        )
        .route(
            "/suppliers/:id/statement/pdf",
            get(statements::supplier_statement_pdf),
        )
        .route(
            "/quotations",
            get(quotations::list_quotations).post(quotations::create_quotation),
        )
        .route(
            "/quotations/:id",
            get(quotations::get_quotation)
                .put(quotations::update_quotation)
                .delete(quotations::delete_quotation),
        )
        .route(
            "/sales-invoices",
            get(invoices::list_sales_invoices).post(invoices::create_sales_invoice),
        )
        .route(
            "/sales-invoices/:id",
            get(invoices::get_sales_invoice)
                .put(invoices::update_sales_invoice)
                .delete(invoices::delete_sales_invoice),
        )
        .route("/sales-invoices/:id/pdf", get(invoices::sales_invoice_pdf))
        .route(
            "/purchase-invoices",
            get(invoices::list_purchase_invoices).post(invoices::create_purchase_invoice),
        )
        .route(
            "/purchase-invoices/:id",
            get(invoices::get_purchase_invoice)
                .put(invoices::update_purchase_invoice)
                .delete(invoices::delete_purchase_invoice),
        )
        .route(
            "/purchase-invoices/:id/pdf",
            get(invoices::purchase_invoice_pdf),
        )
        .route(
            "/receipts",
            get(payments::list_receipts).post(payments::create_receipt),
        )
        .route(
            "/receipts/:id",
            get(payments::get_receipt).delete(payments::delete_receipt),
        )
        .route(
            "/payment-vouchers",
            get(payments::list_payment_vouchers).post(payments::create_payment_voucher),
        )
        .route(
            "/payment-vouchers/:id",
            get(payments::get_payment_voucher).delete(payments::delete_payment_voucher),
        )
        .route(
            "/products",
            get(catalog::list_products).post(catalog::create_product),
        )
        .route(
            "/products/:id",
            get(catalog::get_product)
                .put(catalog::update_product)
                .delete(catalog::delete_product),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/settings/company",
            get(settings::get_company_settings).put(settings::update_company_settings),
        )
        .route(
            "/settings/documents",
            get(settings::get_document_settings).put(settings::update_document_settings),
        )
        .route_layer(from_fn(auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .merge(protected)
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
