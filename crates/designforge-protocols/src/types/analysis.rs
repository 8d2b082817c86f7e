//! Analysis phase output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::ProviderId;

/// Coarse UI element category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Header,
    Footer,
    Section,
}

/// An annotated line of an analysis description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub description: String,
}

impl Element {
    pub fn new(kind: ElementKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// Result of a successful analyze call. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub description: String,
    pub elements: Vec<Element>,
    pub timestamp: DateTime<Utc>,
    pub provider: ProviderId,
}

impl AnalysisResult {
    pub fn new(provider: ProviderId, description: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            elements,
            timestamp: Utc::now(),
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serializes_type_field() {
        let element = Element::new(ElementKind::Footer, "A footer sits below");
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "footer");
        assert_eq!(json["description"], "A footer sits below");
    }

    #[test]
    fn test_analysis_result_new() {
        let result = AnalysisResult::new(ProviderId::Google, "A clean layout", vec![]);
        assert_eq!(result.provider, ProviderId::Google);
        assert_eq!(result.description, "A clean layout");
        assert!(result.elements.is_empty());
    }

    #[test]
    fn test_analysis_ids_are_unique() {
        let a = AnalysisResult::new(ProviderId::OpenAi, "a", vec![]);
        let b = AnalysisResult::new(ProviderId::OpenAi, "a", vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_analysis_timestamp_is_iso8601() {
        let result = AnalysisResult::new(ProviderId::Anthropic, "x", vec![]);
        let json = serde_json::to_value(&result).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
        assert_eq!(json["provider"], "anthropic");
    }
}
