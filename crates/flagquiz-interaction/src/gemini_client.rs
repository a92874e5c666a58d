//! Gemini REST client for oracle completions.
//!
//! Pure transport: sends one free-text prompt, returns the raw completion
//! text. One attempt per call, no retries; the facade decides what a
//! failure means for the game.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::OracleConfig;
use crate::error::OracleError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-completion capability the oracle facade is generic over.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a prompt and returns the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: OracleConfig,
}

impl GeminiClient {
    /// Creates a client with the provided configuration.
    pub fn new(config: OracleConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(OracleConfig::from_env())
    }

    async fn send_request(&self, api_key: &str, prompt: &str) -> Result<String, OracleError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.config.model,
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|err| OracleError::Transport(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let body = response
            .text()
            .await
            .map_err(|err| OracleError::Transport(format!("failed to read Gemini body: {err}")))?;
        if body.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|err| OracleError::MalformedResponse(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.config.is_configured() => key.trim().to_string(),
            _ => {
                tracing::debug!("Gemini API key is not configured; skipping transport");
                return Err(OracleError::Unconfigured);
            }
        };

        self.send_request(&api_key, prompt).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, OracleError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(OracleError::EmptyResponse)
}

fn map_http_error(status: StatusCode, body: String) -> OracleError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or(body);

    OracleError::Http {
        status: status.as_u16(),
        message,
    }
}
