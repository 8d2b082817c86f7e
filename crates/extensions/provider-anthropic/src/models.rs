//! Anthropic model catalog.

use designforge_protocols::ModelDescriptor;

pub fn claude_models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new(
            "claude-3-7-sonnet",
            "Claude 3.7 Sonnet",
            "Most intelligent Claude model with extended thinking",
        ),
        ModelDescriptor::new(
            "claude-3-5-sonnet",
            "Claude 3.5 Sonnet",
            "Advanced model excelling at coding",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let models = claude_models();
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|m| m.id.starts_with("claude-")));
    }
}
