//! Gemini model catalog.

use designforge_protocols::ModelDescriptor;

pub fn gemini_models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new(
            "gemini-2-flash",
            "Gemini 2.0 Flash",
            "Fast workhorse model with real-time streaming",
        ),
        ModelDescriptor::new(
            "gemini-2-pro",
            "Gemini 2.0 Pro",
            "Strongest model for code and world knowledge",
        ),
        ModelDescriptor::new(
            "gemini-2-flash-lite",
            "Gemini 2.0 Flash-Lite",
            "Cost-effective option for high throughput",
        ),
        ModelDescriptor::new(
            "gemini-2-flash-thinking",
            "Gemini 2.0 Flash Thinking",
            "Experimental model with thinking process",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids() {
        let ids: Vec<String> = gemini_models().into_iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "gemini-2-flash",
                "gemini-2-pro",
                "gemini-2-flash-lite",
                "gemini-2-flash-thinking"
            ]
        );
    }
}
