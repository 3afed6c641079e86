//! Template generation through Gemini's `generateContent` API.
//!
//! [`GeminiClient::generate`] never fails: every error is logged and replaced
//! by a message the operator can read, so a failed call cannot clobber the
//! template being edited.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};
use crate::tone::Tone;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_OUTPUT_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.8;

pub const EMPTY_RESPONSE_FALLBACK: &str = "Não foi possível gerar a mensagem. Tente novamente.";
pub const ERROR_FALLBACK: &str =
    "Ocorreu um erro ao conectar com a IA. Verifique sua chave de API.";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` (or `API_KEY`) and `ZAPMSG_GEMINI_MODEL`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        let client = Self::new(api_key);

        match std::env::var("ZAPMSG_GEMINI_MODEL") {
            Ok(model) if !model.trim().is_empty() => client.with_model(model.trim()),
            _ => client,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generates a message template, falling back to a readable notice on failure.
    pub async fn generate(&self, topic: &str, tone: Tone, include_emoji: bool) -> String {
        match self.try_generate(topic, tone, include_emoji).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Failed to generate message");
                fallback_message(&e).to_string()
            }
        }
    }

    pub async fn try_generate(&self, topic: &str, tone: Tone, include_emoji: bool) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiTextPart {
                    text: build_prompt(topic, tone, include_emoji),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        tracing::info!(model = %self.model, tone = ?tone, "Requesting message from Gemini");

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let response: GeminiResponse = response.json().await?;
        extract_text(response)
    }
}

/// Operator-facing text standing in for a failed generation.
pub fn fallback_message(error: &AiError) -> &'static str {
    match error {
        AiError::EmptyResponse => EMPTY_RESPONSE_FALLBACK,
        _ => ERROR_FALLBACK,
    }
}

pub fn build_prompt(topic: &str, tone: Tone, include_emoji: bool) -> String {
    let emoji = if include_emoji {
        "Use emojis moderadamente"
    } else {
        "Sem emojis"
    };

    format!(
        "Crie uma mensagem curta, direta e atrativa para enviar via WhatsApp.\n\
         Tópico/Produto: {}\n\
         Tom de voz: {}\n\
         Uso de Emojis: {}\n\
         \n\
         A mensagem deve ser formatada para leitura rápida no celular.\n\
         Não use aspas no início ou fim.\n\
         Seja persuasivo.",
        topic.trim(),
        tone.prompt_value(),
        emoji
    )
}

fn extract_text(response: GeminiResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(AiError::Gemini(error.message));
    }

    let text = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(text.to_string())
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<String> {
        extract_text(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_prompt_mentions_topic_tone_and_emoji_policy() {
        let prompt = build_prompt("  Pizza 2x1 ", Tone::Urgent, false);
        assert!(prompt.contains("Tópico/Produto: Pizza 2x1\n"));
        assert!(prompt.contains("Tom de voz: Urgente\n"));
        assert!(!prompt.contains("Escassez"));
        assert!(prompt.contains("Uso de Emojis: Sem emojis"));

        let prompt = build_prompt("Pizza", Tone::Friendly, true);
        assert!(prompt.contains("Use emojis moderadamente"));
    }

    #[test]
    fn test_text_parts_are_joined() {
        let text = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Olá {nome}! "},{"text":"Promoção hoje."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(text, "Olá {nome}! Promoção hoje.");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(matches!(parse(r#"{"candidates":[]}"#), Err(AiError::EmptyResponse)));
        assert!(matches!(
            parse(r#"{"candidates":[{"content":{}}]}"#),
            Err(AiError::EmptyResponse)
        ));
    }

    #[test]
    fn test_api_error_body() {
        assert!(matches!(
            parse(r#"{"error":{"message":"API key not valid"}}"#),
            Err(AiError::Gemini(msg)) if msg == "API key not valid"
        ));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!GeminiClient::new(Some("  ".into())).has_api_key());
        assert!(GeminiClient::new(Some("abc".into())).has_api_key());
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(fallback_message(&AiError::EmptyResponse), EMPTY_RESPONSE_FALLBACK);
        assert_eq!(fallback_message(&AiError::MissingApiKey), ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_key_yields_fallback() {
        let client = GeminiClient::new(None);
        assert!(matches!(
            client.try_generate("Pizza", Tone::Friendly, true).await,
            Err(AiError::MissingApiKey)
        ));
        assert_eq!(client.generate("Pizza", Tone::Friendly, true).await, ERROR_FALLBACK);
    }
}
