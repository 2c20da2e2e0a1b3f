use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Reply substituted when the model returns no extractable text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "(No response)";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Narrow seam over the generative-text vendor, so request handling stays
/// provider-independent and tests can substitute stubs.
#[async_trait]
pub trait GenerateText: Send + Sync {
    /// Send one system primer plus prompt, return the generated text.
    async fn generate(&self, primer: &str, prompt: &str) -> anyhow::Result<String>;
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model_id: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model_id: model_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host; wire tests use this.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate(&self, primer: &str, prompt: &str) -> anyhow::Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_id, self.api_key
        );
        let body = json!({
            "system_instruction": { "parts": [{ "text": primer }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error {status}: {detail}"));
        }

        let reply: GenerateContentResponse = response.json().await?;
        Ok(reply
            .into_text()
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate with all parts concatenated, or `None`
    /// when the response carries no text part.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}
