//! Error handling for the resume analyzer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("LLM request failed: {0}")]
    LlmRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API access denied: {0}")]
    AccessDenied(String),

    #[error("Empty response received from model {0}")]
    EmptyResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeAnalyzerError {
    /// Whether the error means the requested model does not exist, so the
    /// next model in the fallback list is worth trying.
    pub fn is_model_unavailable(&self) -> bool {
        match self {
            ResumeAnalyzerError::ModelNotFound(_) => true,
            ResumeAnalyzerError::LlmRequest(message) => {
                let message = message.to_lowercase();
                message.contains("not found") || message.contains("404")
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAnalyzerError::InvalidInput(err.to_string())
    }
}

impl From<zip::result::ZipError> for ResumeAnalyzerError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeAnalyzerError::DocxExtraction(err.to_string())
    }
}

impl From<reqwest::Error> for ResumeAnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeAnalyzerError::Network(err.to_string())
    }
}

impl From<askama::Error> for ResumeAnalyzerError {
    fn from(err: askama::Error) -> Self {
        ResumeAnalyzerError::OutputFormatting(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_is_unavailable() {
        let err = ResumeAnalyzerError::ModelNotFound("gemini-pro".to_string());
        assert!(err.is_model_unavailable());
    }

    #[test]
    fn test_request_message_with_404_is_unavailable() {
        let err = ResumeAnalyzerError::LlmRequest("HTTP 404: models/gemini-x is not found".to_string());
        assert!(err.is_model_unavailable());
    }

    #[test]
    fn test_quota_and_empty_are_not_unavailable() {
        assert!(!ResumeAnalyzerError::QuotaExceeded("limit".to_string()).is_model_unavailable());
        assert!(!ResumeAnalyzerError::EmptyResponse("gemini-pro".to_string()).is_model_unavailable());
        assert!(!ResumeAnalyzerError::AccessDenied("forbidden".to_string()).is_model_unavailable());
    }
}
