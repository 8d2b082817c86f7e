//! Lenient extraction of `{html, css, description}` from model text.
//!
//! Generation models are only loosely instructed to emit JSON and often wrap
//! it in prose or code fences. The span from the first `{` to the last `}` is
//! decoded; anything else is a parse failure that keeps the raw text.

use serde_json::Value;

use designforge_protocols::{DesignOutput, ProviderError};

/// Extract the design payload from raw model output.
pub fn parse_design_output(raw: &str) -> Result<DesignOutput, ProviderError> {
    let span = json_span(raw)
        .ok_or_else(|| ProviderError::parse("no JSON object found in model output", raw))?;

    let value: Value = serde_json::from_str(span)
        .map_err(|e| ProviderError::parse(format!("invalid JSON in model output: {}", e), raw))?;

    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ProviderError::parse(format!("missing `{}` field", name), raw))
    };

    Ok(DesignOutput {
        html: field("html")?,
        css: field("css")?,
        description: field("description")?,
    })
}

/// First `{` through last `}`, inclusive.
fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
