use crate::config::Config;
use crate::error::ProviderError;
use crate::i18n::Language;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub source_text: String,
    pub target_language: Language,
    pub translated_text: String,
    /// Source language as detected by the provider, when reported
    pub detected_source: Option<String>,
}

/// A machine translation provider.
///
/// Implementations make a single attempt and detect the source language
/// themselves. Callers are responsible for rejecting empty input.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<TranslationResult, ProviderError>;
}

/// Client for the public Google Translate endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.translate_timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;
        Ok(Self::new(client, config.translate_api_url.clone()))
    }

    /// Client with a short timeout, for tests against a mock server.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, base_url))
    }
}

#[async_trait]
impl TranslationGateway for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<TranslationResult, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);

        debug!("Translating {} chars to {}", text.chars().count(), target.code());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            warn!("Google Translate API error: {} - {}", status, body);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let (translated_text, detected_source) = parse_translate_response(&body)?;

        Ok(TranslationResult {
            source_text: text.to_string(),
            target_language: target,
            translated_text,
            detected_source,
        })
    }
}

/// Extract the translation and detected source language from a
/// `translate_a/single` response.
///
/// The provider splits long input into segments at `[0][*][0]`; they are
/// concatenated in order. The detected source language sits at index 2.
fn parse_translate_response(body: &str) -> Result<(String, Option<String>), ProviderError> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("not JSON: {}", e)))?;

    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::InvalidResponse("missing segment array".to_string()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(ProviderError::EmptyTranslation);
    }

    let detected = json
        .get(2)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Ok((translation, detected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn google_response(segments: &[&str], source: &str) -> serde_json::Value {
        let parts: Vec<serde_json::Value> = segments
            .iter()
            .map(|s| serde_json::json!([s, "src", null, null, 10]))
            .collect();
        serde_json::json!([parts, null, source])
    }

    fn translator(server: &MockServer) -> GoogleTranslator {
        GoogleTranslator::with_timeout(server.uri(), Duration::from_secs(5))
            .expect("client should build")
    }

    // ==================== Response Parsing Tests ====================

    #[test]
    fn test_parse_single_segment() {
        let body = google_response(&["Hallo"], "en").to_string();
        let (text, source) = parse_translate_response(&body).unwrap();
        assert_eq!(text, "Hallo");
        assert_eq!(source.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_concatenates_segments() {
        let body = google_response(&["Hallo Welt. ", "Wie geht's?"], "en").to_string();
        let (text, _) = parse_translate_response(&body).unwrap();
        assert_eq!(text, "Hallo Welt. Wie geht's?");
    }

    #[test]
    fn test_parse_without_detected_language() {
        let body = r#"[[["Bonjour","Hello",null,null,1]]]"#;
        let (text, source) = parse_translate_response(body).unwrap();
        assert_eq!(text, "Bonjour");
        assert!(source.is_none());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_translate_response("<html>blocked</html>").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_segments() {
        let err = parse_translate_response(r#"{"error": "bad"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_translation() {
        let err = parse_translate_response(r#"[[],null,"en"]"#).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyTranslation));
    }

    // ==================== Integration Tests with Wiremock ====================

    #[tokio::test]
    async fn test_translate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "auto"))
            .and(query_param("tl", "de"))
            .and(query_param("q", "Hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(google_response(&["Hallo"], "en")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server)
            .translate("Hello", Language::GERMAN)
            .await
            .expect("Should succeed");

        assert_eq!(result.source_text, "Hello");
        assert_eq!(result.translated_text, "Hallo");
        assert_eq!(result.target_language, Language::GERMAN);
        assert_eq!(result.detected_source.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_translate_encodes_special_characters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("q", "a & b = c?"))
            .respond_with(ResponseTemplate::new(200).set_body_json(google_response(&["a y b"], "en")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server)
            .translate("a & b = c?", Language::new("es"))
            .await
            .expect("Should succeed");

        assert_eq!(result.translated_text, "a y b");
    }

    #[tokio::test]
    async fn test_translate_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = translator(&mock_server)
            .translate("Hello", Language::GERMAN)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Status { status: 429, .. }));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_translate_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server)
            .translate("Hello", Language::GERMAN)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_translate_connection_refused() {
        // Nothing listens on port 9 on the test host
        let translator = GoogleTranslator::with_timeout("http://127.0.0.1:9", Duration::from_secs(2))
            .expect("client should build");

        let err = translator
            .translate("Hello", Language::GERMAN)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Request(_)));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let translator = GoogleTranslator::new(reqwest::Client::new(), "http://example.com/");
        assert_eq!(translator.base_url, "http://example.com");
    }
}
