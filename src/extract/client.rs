// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Instruction extraction via an OpenAI-compatible chat API
//!
//! One structured-output request per call: no retry, no streaming, no
//! multi-turn correction. Credential rejections are reported distinctly
//! so the caller can prompt for a new key instead of retrying blindly.

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::guide::{steps_are_contiguous, Category, Difficulty, ProjectGuide, Step};

use super::ExtractError;

/// Maximum characters of scraped content passed to the model
const MAX_CONTENT_CHARS: usize = 15_000;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts and formats \
origami instructions. Always respond with valid JSON only.";

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(serde::Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Guide shape the model is instructed to return (no id yet)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedGuide {
    name: String,
    difficulty: Difficulty,
    category: Category,
    steps: Vec<Step>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

/// Client for extracting structured guides from scraped text
pub struct InstructionExtractor {
    client: Client,
    endpoint: String,
    model: String,
}

impl InstructionExtractor {
    /// Create a new extractor client
    pub fn new(endpoint: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Instruction extractor configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
        })
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Extract a structured guide from scraped content
    ///
    /// Returns `Ok(None)` when the model reports it could not find
    /// complete instructions in the content.
    pub async fn extract(
        &self,
        content: &str,
        query: &str,
        credential: &str,
    ) -> Result<Option<ProjectGuide>, ExtractError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(content, query),
                },
            ],
            temperature: 0.3,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        debug!("Requesting extraction for query '{}'", query);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ExtractError::CredentialRejected);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if message.contains("API key") {
                return Err(ExtractError::CredentialRejected);
            }
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Http(e.to_string()))?;

        let Some(raw) = chat.choices.into_iter().next().map(|c| c.message.content) else {
            return Ok(None);
        };

        parse_guide_json(&raw, query)
    }
}

/// Build the fixed instruction template
fn build_prompt(content: &str, query: &str) -> String {
    let truncated: String = content.chars().take(MAX_CONTENT_CHARS).collect();

    format!(
        r#"You are a helpful assistant that extracts origami instructions from web content.

Given the following web content, extract origami folding instructions and return them in JSON format.

Query: "{query}"

Web Content:
{truncated}

Please return a JSON object with this exact structure:
{{
  "name": "Name of the origami",
  "difficulty": "easy" | "medium" | "hard",
  "category": "animals" | "toys" | "flowers" | "decorations" | "other",
  "steps": [
    {{
      "stepNumber": 1,
      "instruction": "Clear step-by-step instruction",
      "imageUrl": "URL to image if found, or empty string"
    }}
  ],
  "sourceUrl": "Original URL",
  "thumbnailUrl": "URL to thumbnail image if found, or empty string"
}}

Make the instructions clear and kid-friendly. If you can't find complete instructions, return null."#
    )
}

/// Parse the model's JSON output into a guide, attaching a synthesized id
fn parse_guide_json(raw: &str, query: &str) -> Result<Option<ProjectGuide>, ExtractError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;

    if value.is_null() {
        return Ok(None);
    }

    let parsed: ParsedGuide = serde_json::from_value(value)
        .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;

    // Reject incomplete extractions rather than serving broken guides
    if parsed.steps.is_empty() || !steps_are_contiguous(&parsed.steps) {
        return Ok(None);
    }

    Ok(Some(ProjectGuide {
        id: guide_id(query),
        name: parsed.name,
        difficulty: parsed.difficulty,
        category: parsed.category,
        steps: parsed.steps,
        source_url: parsed.source_url.filter(|s| !s.is_empty()),
        thumbnail_url: parsed.thumbnail_url.filter(|s| !s.is_empty()),
        is_favorite: None,
        is_completed: None,
    }))
}

/// Synthesize a unique id from the lowercased, hyphenated query plus a timestamp
fn guide_id(query: &str) -> String {
    let slug = query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("origami-{}-{}", slug, chrono::Utc::now().timestamp_millis())
}
