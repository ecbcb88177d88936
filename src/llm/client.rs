//! Gemini `generateContent` client

use crate::config::LlmConfig;
use crate::error::{Result, ResumeAnalyzerError};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Anything that can turn a prompt into text with a named model
pub trait TextGenerator {
    fn generate(&self, model: &str, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Map a non-success HTTP status to the error the fallback loop classifies
pub fn status_error(model: &str, status: StatusCode, body: &str) -> ResumeAnalyzerError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let detail = format!("{} (HTTP {}): {}", model, status.as_u16(), message);

    match status {
        StatusCode::NOT_FOUND => ResumeAnalyzerError::ModelNotFound(detail),
        StatusCode::TOO_MANY_REQUESTS => ResumeAnalyzerError::QuotaExceeded(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ResumeAnalyzerError::AccessDenied(detail),
        _ => ResumeAnalyzerError::LlmRequest(detail),
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ResumeAnalyzerError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from configuration, reading the key from the configured
    /// environment variable.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            ResumeAnalyzerError::Configuration(format!(
                "Gemini API key is not configured. Please set the {} environment variable.",
                config.api_key_env
            ))
        })?;
        Self::new(
            api_key,
            config.api_base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("POST {}", self.endpoint(model));
        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = status_error(model, status, &body);
            warn!("Model {} request failed: {}", model, err);
            return Err(err);
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.text())
    }
}
