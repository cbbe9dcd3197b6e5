//! Client for the external text-generation service behind the assistant.

use gloo_net::http::Request;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert in the 'Productive Use of Energy' (PUE) sector in Africa. You help investors, mini-grid developers, and rural SMEs understand AgAsset Co's value proposition: bridging the gap between energy and economy through financing productive assets. Be authoritative yet accessible.";

const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error, PartialEq)]
pub enum AssistantError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Malformed(String),
    #[error("service returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentRequest {
    /// Wraps the visitor's question in the advisor persona.
    pub fn for_question(question: &str) -> Self {
        let prompt = format!(
            "You are the AgAsset Co Sustainability Expert. Answer the user's question about rural energy, agricultural financing, or productive use of energy (PUE). Use a professional, premium, and helpful tone. Keep answers concise. Current question: {}",
            question
        );
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: SYSTEM_INSTRUCTION.to_string() }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature: TEMPERATURE },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined and trimmed.
    pub fn reply_text(&self) -> Result<String, AssistantError> {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyReply);
        }
        Ok(text.to_string())
    }
}

pub fn endpoint(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        urlencoding::encode(api_key)
    )
}

/// Sends one question and returns the completion text.
pub async fn ask_assistant(question: &str) -> Result<String, AssistantError> {
    let api_key = config::assistant_api_key().ok_or(AssistantError::MissingApiKey)?;
    let url = endpoint(config::assistant_base_url(), config::assistant_model(), api_key);
    let body = GenerateContentRequest::for_question(question);

    debug!("Sending assistant request to model {}", config::assistant_model());
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| AssistantError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AssistantError::Network(e.to_string()))?;

    if !response.ok() {
        error!("Assistant request failed with status {}", response.status());
        return Err(AssistantError::Status(response.status()));
    }

    let parsed = response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| AssistantError::Malformed(e.to_string()))?;
    parsed.reply_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let body = serde_json::to_value(GenerateContentRequest::for_question("What's the typical ROI?")).unwrap();
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], SYSTEM_INSTRUCTION);
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.ends_with("Current question: What's the typical ROI?"));
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn reply_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Lease-to-own " }, { "text": "spreads cost.\n" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.reply_text().unwrap(), "Lease-to-own spreads cost.");
    }

    #[test]
    fn blank_or_missing_reply_is_an_error() {
        for body in [json!({}), json!({ "candidates": [] }), json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] }), json!({ "candidates": [{}] })] {
            let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert_eq!(response.reply_text(), Err(AssistantError::EmptyReply));
        }
    }

    #[test]
    fn endpoint_encodes_key() {
        assert_eq!(
            endpoint("https://example.test/v1beta/", "gemini-x", "a b&c"),
            "https://example.test/v1beta/models/gemini-x:generateContent?key=a%20b%26c"
        );
    }
}
