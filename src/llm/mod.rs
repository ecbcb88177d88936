//! LLM integration module

pub mod client;
pub mod fallback;
pub mod prompts;

pub use client::{GeminiClient, TextGenerator};
pub use fallback::{AnalysisOutcome, ModelFallback, FALLBACK_ANALYSIS};
pub use prompts::{PromptParams, PromptTemplates};
