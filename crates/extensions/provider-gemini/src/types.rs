//! Gemini API types.

use serde::{Deserialize, Serialize};

use designforge_protocols::ProviderError;

/// Gemini content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Inline data (for images).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Content in a request or candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Sampling parameters. Fixed for every design request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl Default for SafetySetting {
    fn default() -> Self {
        Self {
            category: "HARM_CATEGORY_DANGEROUS_CONTENT".to_string(),
            threshold: "BLOCK_NONE".to_string(),
        }
    }
}

/// Generate content request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub safety_settings: Vec<SafetySetting>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn with_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { role: None, parts }],
            safety_settings: vec![SafetySetting::default()],
            generation_config: GenerationConfig::default(),
        }
    }

    /// Text instruction followed by one inline image.
    pub fn multimodal(
        instruction: impl Into<String>,
        mime_type: impl Into<String>,
        base64_data: impl Into<String>,
    ) -> Self {
        Self::with_parts(vec![
            Part::Text {
                text: instruction.into(),
            },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.into(),
                    data: base64_data.into(),
                },
            },
        ])
    }

    /// Single text part.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::with_parts(vec![Part::Text {
            text: prompt.into(),
        }])
    }
}

/// Generate content response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
    }
}

/// Pull the generated text out of a raw response body.
pub fn extract_text(body: &serde_json::Value) -> Result<String, ProviderError> {
    let raw = || body.to_string();
    let response: GenerateContentResponse = serde_json::from_value(body.clone())
        .map_err(|e| ProviderError::parse(format!("unexpected Gemini response: {}", e), raw()))?;
    response
        .first_text()
        .map(String::from)
        .ok_or_else(|| ProviderError::parse("Gemini response has no candidate text", raw()))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
