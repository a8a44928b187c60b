//! Gemini client for the service analysis prompt

use crate::batch::ContentModel;
use crate::config::GeminiConfig;
use crate::error::{AnalyzerError, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{json, Value};

pub struct GeminiClient {
    config: GeminiConfig,
    http_client: HttpClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and return the candidate text
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::ServiceUnavailable(format!(
                "Gemini API returned {}: {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        Self::candidate_text(&body)
    }

    /// Concatenate the text parts of the first candidate
    fn candidate_text(body: &Value) -> Result<String> {
        let candidate = &body["candidates"][0];

        let text: String = candidate["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|part| part["text"].as_str()).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = body["promptFeedback"]["blockReason"]
                .as_str()
                .or_else(|| candidate["finishReason"].as_str())
                .unwrap_or("no candidates");
            return Err(AnalyzerError::Processing(format!(
                "No text in Gemini response ({})",
                reason
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl ContentModel for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        self.generate(prompt).await
    }
}
