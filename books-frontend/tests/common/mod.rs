use std::sync::Arc;
use std::time::Duration;

use books_api::BooksApiClient;
use books_frontend::AppState;
use books_frontend::config::AuthSettings;
use books_frontend::services::pdf::PdfRenderer;
use books_frontend::startup::build_router;
use secrecy::Secret;
use wiremock::MockServer;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct-horse";

pub struct TestApp {
    pub address: String,
    pub backend: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spin up the frontend on a random port, backed by a wiremock stand-in
    /// for the remote bookkeeping API.
    pub async fn spawn() -> Self {
        let backend = MockServer::start().await;

        let api = Arc::new(
            BooksApiClient::new(&backend.uri(), Duration::from_secs(5))
                .expect("Failed to build API client"),
        );
        let pdf = Arc::new(PdfRenderer::new(
            "wkhtmltopdf".to_string(),
            Duration::from_secs(5),
        ));
        let auth = Arc::new(AuthSettings {
            username: TEST_USERNAME.to_string(),
            password: Secret::new(TEST_PASSWORD.to_string()),
        });

        let app = build_router(AppState::new(api, pdf, auth));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local addr").port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Sessions ride on cookies, so the client keeps a cookie store.
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build reqwest client");

        Self {
            address,
            backend,
            client,
        }
    }

    pub async fn login(&self) {
        let response = self
            .client
            .post(format!("{}/login", self.address))
            .json(&serde_json::json!({
                "username": TEST_USERNAME,
                "password": TEST_PASSWORD,
            }))
            .send()
            .await
            .expect("Login request failed");
        assert!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );
    }
}
