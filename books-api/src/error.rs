//! Error taxonomy for the remote bookkeeping API.
//!
//! Failures are classified from what the client can actually observe: the
//! transport result, the HTTP status, and the response body. Every error is
//! terminal for the in-flight operation; there is no retry policy anywhere.
//! Recovery is always an explicit user action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure. Indistinguishable from a blocked cross-origin
    /// request when the caller is a browser, hence the CORS remediation hint.
    #[error("network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The hosting provider answered with its anti-bot challenge page instead
    /// of the API response.
    #[error("hosting anti-bot challenge page returned instead of data")]
    HostingChallenge,

    /// Body failed to parse as JSON, or parsed but did not match the schema.
    #[error("malformed response: {detail}")]
    Malformed { detail: String },

    /// Backend answered with an explicit `{"error": ...}` payload.
    #[error("api error: {0}")]
    Api(String),

    /// HTTP 404 on a single-resource fetch.
    #[error("{what} not found")]
    NotFound { what: String },
}

impl ApiError {
    /// Canned user-facing remediation message (English / Arabic).
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Could not reach the bookkeeping server. If the API lives on another \
                 domain, make sure it sends an Access-Control-Allow-Origin header and \
                 that the server is online. / \
                 تعذر الوصول إلى خادم المحاسبة. تأكد من تفعيل ترويسة CORS وأن الخادم يعمل."
                    .to_string()
            }
            ApiError::HostingChallenge => {
                "The hosting provider returned a browser-verification page instead of \
                 data. Open the API URL in a browser once, or disable the anti-bot \
                 challenge for this endpoint. / \
                 أعاد مزوّد الاستضافة صفحة تحقق بدل البيانات. افتح رابط الواجهة في \
                 المتصفح أو عطّل حماية مكافحة الروبوتات."
                    .to_string()
            }
            ApiError::Malformed { .. } => {
                "The server response was not valid JSON; this is likely a server-side \
                 fatal error. Check the backend logs. / \
                 استجابة الخادم ليست JSON صالحًا، على الأرجح خطأ في جانب الخادم."
                    .to_string()
            }
            ApiError::Api(msg) => msg.clone(),
            ApiError::NotFound { what } => {
                format!("{what} not found / لم يتم العثور على السجل المطلوب")
            }
        }
    }

    /// Short machine-readable tag, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::HostingChallenge => "hosting_challenge",
            ApiError::Malformed { .. } => "malformed",
            ApiError::Api(_) => "api_error",
            ApiError::NotFound { .. } => "not_found",
        }
    }
}
