//! Instruction text sent to the vendors.

use designforge_protocols::Design;

/// Fixed instruction for the analyze phase.
pub const ANALYZE_INSTRUCTION: &str = "Analyze this website design in detail. Describe its layout, color scheme, and key elements. Focus on the visual hierarchy and user experience aspects.";

/// Generation prompt embedding the prior analysis and the requested changes.
pub fn generation_prompt(analysis: &str, modifications: &str) -> String {
    format!(
        "Based on this website design analysis:\n{}\n\nGenerate a new website design with these modifications:\n{}\n\nProvide the design as HTML and CSS code that maintains the core elements while incorporating the requested changes. The response should be in JSON format with html, css, and description fields.",
        analysis, modifications
    )
}

/// Modification request used when expanding an existing design.
///
/// Becomes the `modifications` part of [`generation_prompt`].
pub fn expansion_request(source: &Design, directions: &str) -> String {
    format!(
        "Expand on this existing design ({}).\nOriginal request:\n{}\n\nExisting HTML:\n{}\n\nExisting CSS:\n{}\n\nAdditional directions:\n{}",
        source.description, source.prompt, source.html_content, source.css_content, directions
    )
}
