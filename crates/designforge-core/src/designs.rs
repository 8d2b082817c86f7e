//! Result construction shared by every adapter.

use std::future::Future;

use tracing::warn;

use designforge_protocols::{AnalysisResult, Design, ProviderError, ProviderId};

use crate::elements::extract_elements;
use crate::output::parse_design_output;

/// Wrap analysis text with its extracted elements.
pub fn build_analysis(provider: ProviderId, text: String) -> AnalysisResult {
    let elements = extract_elements(&text);
    AnalysisResult::new(provider, text, elements)
}

/// Run `count` sequential generation calls and parse each reply.
///
/// `call` receives the zero-based index and returns raw model text. The
/// first failure, transport or parse, aborts the loop and discards what was
/// already built.
pub async fn collect_designs<F, Fut>(
    count: usize,
    prompt: &str,
    mut call: F,
) -> Result<Vec<Design>, ProviderError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<String, ProviderError>>,
{
    if count == 0 {
        return Err(ProviderError::InvalidRequest(
            "Design count must be at least 1".to_string(),
        ));
    }

    let mut designs = Vec::with_capacity(count);
    for index in 0..count {
        let raw = call(index).await?;
        let output = parse_design_output(&raw).inspect_err(|e| {
            warn!(index, "Error parsing design data: {}", e);
        })?;
        designs.push(Design::from_output(output, prompt));
    }

    Ok(designs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REPLY: &str = r#"Sure! {"html": "<div></div>", "css": "div {}", "description": "Plain"}"#;

    #[test]
    fn test_build_analysis_extracts_elements() {
        let analysis = build_analysis(
            ProviderId::Google,
            "A sticky header\nWarm colors\nA footer with links".to_string(),
        );
        assert_eq!(analysis.elements.len(), 2);
        assert_eq!(analysis.provider, ProviderId::Google);
    }

    #[tokio::test]
    async fn test_collect_designs_count_and_order() {
        let designs = collect_designs(3, "dark mode", |i| async move {
            Ok(format!(
                r#"{{"html": "<p>{}</p>", "css": "", "description": "v{}"}}"#,
                i, i
            ))
        })
        .await
        .unwrap();

        assert_eq!(designs.len(), 3);
        let descriptions: Vec<&str> = designs.iter().map(|d| d.description.as_str()).collect();
        assert_eq!(descriptions, vec!["v0", "v1", "v2"]);
        let ids: HashSet<_> = designs.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(designs.iter().all(|d| d.prompt == "dark mode"));
    }

    #[tokio::test]
    async fn test_collect_designs_aborts_on_failure() {
        let calls = AtomicUsize::new(0);
        let result = collect_designs(3, "p", |i| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if i == 1 {
                    Err(ProviderError::Network("reset".to_string()))
                } else {
                    Ok(REPLY.to_string())
                }
            }
        })
        .await;

        assert!(matches!(result, Err(ProviderError::Network(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_collect_designs_parse_failure_aborts() {
        let result = collect_designs(2, "p", |_| async { Ok("no json here".to_string()) }).await;
        assert!(matches!(result, Err(ProviderError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_collect_designs_zero_count_rejected() {
        let result = collect_designs(0, "p", |_| async { Ok(REPLY.to_string()) }).await;
        assert!(matches!(result, Err(ProviderError::InvalidRequest(_))));
    }
}
