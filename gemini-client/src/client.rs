//! HTTP client and response classification for `generateContent`.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::GeminiError;
use crate::types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Tool,
};
use crate::ChatModel;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for one Gemini model. Cheap to clone; holds a pooled reqwest client.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the API base URL (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    pub(crate) async fn request(
        &self,
        contents: Vec<Content>,
        tools: Vec<Tool>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let request = GenerateContentRequest { contents, tools };
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_api_message(&body).unwrap_or(body);
            if status.as_u16() == 404 && mentions_model(&message) {
                return Err(GeminiError::ModelNotFound {
                    model: self.model.clone(),
                });
            }
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        if let Some(feedback) = &parsed.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GeminiError::PromptBlocked {
                    reason: reason.clone(),
                });
            }
        }
        if let Some(candidate) = parsed.candidates.first() {
            if let Some(reason) = &candidate.finish_reason {
                if reason == "SAFETY" {
                    return Err(GeminiError::ResponseBlocked {
                        reason: reason.clone(),
                    });
                }
            }
        }

        Ok(parsed)
    }
}

/// Concatenates the text parts of every candidate, skipping blanks.
pub(crate) fn candidate_text(candidates: &[Candidate]) -> Result<String, GeminiError> {
    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(content) = &candidate.content {
            for part in &content.parts {
                let trimmed = part.text.trim();
                if !trimmed.is_empty() {
                    collected.push(trimmed.to_string());
                }
            }
        }
    }
    if collected.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }
    Ok(collected.join("\n\n"))
}

fn extract_api_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(String::from)
}

fn mentions_model(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("model") || lower.contains("not found")
}

#[async_trait]
impl ChatModel for GeminiClient {
    #[instrument(skip(self, history, input), fields(model = %self.model, history_len = history.len()))]
    async fn generate(
        &self,
        history: &[Content],
        input: &str,
    ) -> Result<String, GeminiError> {
        let mut contents = history.to_vec();
        contents.push(Content::user(input));
        debug!(turns = contents.len(), "Submitting chat request");

        let response = self.request(contents, Vec::new()).await?;
        candidate_text(&response.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_contains_model_and_key() {
        let client = GeminiClient::new("k123".to_string()).with_model("gemini-pro");
        let url = client.endpoint();
        assert!(url.contains("/models/gemini-pro:generateContent"));
        assert!(url.ends_with("key=k123"));
    }

    #[test]
    fn api_message_extracted_from_error_body() {
        let body = r#"{"error":{"code":404,"message":"model not found","status":"NOT_FOUND"}}"#;
        assert_eq!(extract_api_message(body).as_deref(), Some("model not found"));
        assert!(extract_api_message("plain text").is_none());
    }
}
