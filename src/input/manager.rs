//! Input manager for handling different file types

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the job description comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    File(PathBuf),
    Text(String),
}

impl JobSource {
    /// Short label for report metadata
    pub fn describe(&self) -> String {
        match self {
            JobSource::File(path) => path.display().to_string(),
            JobSource::Text(_) => "inline text".to_string(),
        }
    }
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract trimmed text from a supported file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from Word document: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}. Supported: {}",
                    path.display(),
                    FileType::supported_extensions().join(", ")
                )));
            }
        };
        let text = text.trim().to_string();

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    /// Resume text; an empty extraction is an error
    pub async fn load_resume(&mut self, path: &Path) -> Result<String> {
        let text = self.extract_text(path).await?;
        require_text(text, "No text could be extracted from the resume file")
    }

    /// Job description text from a file or inline; empty is an error
    pub async fn load_job_description(&mut self, source: &JobSource) -> Result<String> {
        let text = match source {
            JobSource::File(path) => self.extract_text(path).await?,
            JobSource::Text(text) => text.trim().to_string(),
        };
        require_text(text, "No text could be extracted from the job description")
    }

    /// Saved analysis text, read verbatim so `##`, `**` and bullet markers
    /// survive for the parser. Markdown is not rendered.
    pub async fn load_analysis(&mut self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match self.detect_file_type(path)? {
            FileType::Text | FileType::Markdown => {
                info!("Reading saved analysis: {}", path.display());
                let text = PlainTextExtractor.extract(path).await?;
                require_text(text, "The analysis file is empty")
            }
            _ => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Saved analysis must be a text or markdown file: {}",
                path.display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn require_text(text: String, message: &str) -> Result<String> {
    if text.trim().is_empty() {
        Err(ResumeAnalyzerError::InvalidInput(message.to_string()))
    } else {
        Ok(text)
    }
}
