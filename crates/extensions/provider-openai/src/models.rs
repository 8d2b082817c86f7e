//! OpenAI model catalog.

use designforge_protocols::ModelDescriptor;

pub fn openai_models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new(
            "gpt-4-5-preview",
            "GPT-4.5 Preview",
            "OpenAI's largest and most capable GPT model",
        ),
        ModelDescriptor::new("gpt-4o", "GPT-4o", "A fast, intelligent, and flexible GPT model"),
        ModelDescriptor::new(
            "gpt-4o-mini",
            "GPT-4o Mini",
            "A fast, affordable small model for focused tasks",
        ),
        ModelDescriptor::new(
            "o3-mini",
            "O3-Mini",
            "Fast, flexible reasoning model for STEM applications",
        ),
        ModelDescriptor::new("o1", "O1", "High-intelligence reasoning model"),
        ModelDescriptor::new("o1-mini", "O1-Mini", "Faster, affordable reasoning model"),
    ]
}
