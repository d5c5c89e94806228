use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub pdf: PdfSettings,
    pub auth: AuthSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the remote bookkeeping API.
    pub base_url: String,
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize, Clone)]
pub struct PdfSettings {
    /// Path to the HTML-to-PDF converter binary.
    #[serde(default = "default_wkhtmltopdf_path")]
    pub wkhtmltopdf_path: String,
    #[serde(default = "default_pdf_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_wkhtmltopdf_path() -> String {
    "wkhtmltopdf".to_string()
}

fn default_pdf_timeout_secs() -> u64 {
    20
}

/// Operator credentials for the session login. This is a front-door
/// convenience, not a security boundary; the remote API is the system of
/// record.
#[derive(Deserialize, Clone)]
pub struct AuthSettings {
    pub username: String,
    pub password: Secret<String>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Works both from the workspace root and from within books-frontend.
    let configuration_directory = if base_path.ends_with("books-frontend") {
        base_path.join("config")
    } else {
        base_path.join("books-frontend").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn minimal_yaml_loads_with_defaults() {
        let yaml = "\
server:
  host: 127.0.0.1
  port: 9080
backend:
  base_url: http://localhost:8000/api
pdf: {}
auth:
  username: admin
  password: admin
";
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .expect("config builds")
            .try_deserialize()
            .expect("settings deserialize");

        assert_eq!(settings.server.port, 9080);
        assert_eq!(settings.backend.timeout_secs, 30);
        assert_eq!(settings.pdf.wkhtmltopdf_path, "wkhtmltopdf");
        assert_eq!(settings.pdf.timeout_secs, 20);
        assert_eq!(settings.auth.password.expose_secret(), "admin");
    }
}
