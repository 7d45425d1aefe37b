/// Completion providers — the single seam for external LLM integrations.
///
/// Only the null echo provider is wired up today. Selecting `openai` or
/// `gemini` logs a warning and degrades to null until those clients land.
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;

pub mod handlers;

/// How many prompt characters the echo stub reflects back.
const ECHO_LIMIT: usize = 200;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Inert provider: echoes a truncated prompt without any external call.
pub struct NullProvider;

#[async_trait]
impl CompletionProvider for NullProvider {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        Ok(format!(
            "[LLM disabled] echo: {}",
            truncate_chars(prompt, ECHO_LIMIT)
        ))
    }
}

/// Selects a provider from config. Unknown or unimplemented selectors fall
/// back to the null provider so the API always starts.
pub fn provider_from_config(config: &Config) -> Arc<dyn CompletionProvider> {
    match config.default_llm_provider.trim().to_lowercase().as_str() {
        "" | "null" => {}
        "openai" => {
            if config.openai_api_key.is_none() {
                warn!("Provider 'openai' selected without OPENAI_API_KEY");
            }
            warn!("Provider 'openai' is not implemented yet; using the null echo provider");
        }
        "gemini" => {
            if config.gemini_api_key.is_none() {
                warn!("Provider 'gemini' selected without GEMINI_API_KEY");
            }
            warn!("Provider 'gemini' is not implemented yet; using the null echo provider");
        }
        other => {
            warn!("Unknown completion provider '{other}'; using the null echo provider");
        }
    }
    Arc::new(NullProvider)
}

/// Truncates on a character boundary, never mid-codepoint.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_provider_echoes_prompt() {
        let out = NullProvider.complete("hello world").await.unwrap();
        assert_eq!(out, "[LLM disabled] echo: hello world");
    }

    #[tokio::test]
    async fn test_null_provider_truncates_long_prompt() {
        let prompt = "x".repeat(500);
        let out = NullProvider.complete(&prompt).await.unwrap();
        assert_eq!(out, format!("[LLM disabled] echo: {}", "x".repeat(200)));
    }

    #[tokio::test]
    async fn test_null_provider_empty_prompt() {
        let out = NullProvider.complete("").await.unwrap();
        assert_eq!(out, "[LLM disabled] echo: ");
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let s = "héllo wörld";
        assert_eq!(truncate_chars(s, 4), "héll");
        assert_eq!(truncate_chars(s, 100), s);
    }
}
