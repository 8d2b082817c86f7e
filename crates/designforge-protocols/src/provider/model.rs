//! Provider identity and model catalog types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of supported AI vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Google,
    Anthropic,
    #[serde(rename = "openai")]
    OpenAi,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::Google, ProviderId::Anthropic, ProviderId::OpenAi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }

    /// Human-readable vendor product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Gemini",
            Self::Anthropic => "Claude",
            Self::OpenAi => "ChatGPT",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" | "gemini" => Ok(Self::Google),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// Definition of a selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model identifier sent to the vendor.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Short description.
    pub description: String,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
