//! Legacy compatibility shims for the PHP backend's hosting environment.
//!
//! The shared host in front of the backend sometimes answers API requests
//! with its JavaScript anti-bot challenge page. There is no status code or
//! content-type contract for this; the only available signal is the page
//! body itself. That body-sniffing is isolated here so the rest of the
//! client never inspects raw response text.

/// Fingerprint of the hosting provider's challenge page: it loads `aes.js`
/// and sets a cookie from script.
pub fn looks_like_hosting_challenge(body: &str) -> bool {
    body.contains("aes.js") && body.contains("document.cookie")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_challenge_page() {
        let body = r#"<html><script src="/aes.js"></script>
            <script>document.cookie = "__test=...";</script></html>"#;
        assert!(looks_like_hosting_challenge(body));
    }

    #[test]
    fn requires_both_markers() {
        assert!(!looks_like_hosting_challenge("<script src=\"aes.js\"></script>"));
        assert!(!looks_like_hosting_challenge("document.cookie = \"a=b\""));
        assert!(!looks_like_hosting_challenge("{\"error\":\"nope\"}"));
    }
}
