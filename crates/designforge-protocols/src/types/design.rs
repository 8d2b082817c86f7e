//! Generated design types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The structured payload a generation model is asked to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignOutput {
    pub html: String,
    pub css: String,
    pub description: String,
}

/// One generated HTML/CSS variation.
///
/// Immutable once created; expanding a design produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: Uuid,
    pub html_content: String,
    pub css_content: String,
    pub description: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

impl Design {
    /// Wrap parsed model output with a fresh id and timestamp.
    pub fn from_output(output: DesignOutput, prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            html_content: output.html,
            css_content: output.css,
            description: output.description,
            prompt: prompt.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> DesignOutput {
        DesignOutput {
            html: "<main></main>".to_string(),
            css: "main { color: blue; }".to_string(),
            description: "Blue variant".to_string(),
        }
    }

    #[test]
    fn test_from_output_copies_fields() {
        let design = Design::from_output(output(), "make it blue");
        assert_eq!(design.html_content, "<main></main>");
        assert_eq!(design.css_content, "main { color: blue; }");
        assert_eq!(design.description, "Blue variant");
        assert_eq!(design.prompt, "make it blue");
    }

    #[test]
    fn test_design_json_uses_camel_case() {
        let design = Design::from_output(output(), "p");
        let json = serde_json::to_value(&design).unwrap();
        assert!(json.get("htmlContent").is_some());
        assert!(json.get("cssContent").is_some());
        assert!(json.get("html_content").is_none());
    }

    #[test]
    fn test_design_ids_are_unique() {
        let a = Design::from_output(output(), "p");
        let b = Design::from_output(output(), "p");
        assert_ne!(a.id, b.id);
    }
}
