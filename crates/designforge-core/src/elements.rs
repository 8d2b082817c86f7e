//! Heuristic element annotation of analysis text.
//!
//! Best-effort only: lines are classified by case-sensitive keyword presence,
//! which says nothing about the real structure of the page.

use designforge_protocols::{Element, ElementKind};

const HEADER_KEYWORDS: &[&str] = &["header", "navigation"];
const FOOTER_KEYWORDS: &[&str] = &["footer"];
const SECTION_KEYWORDS: &[&str] = &["section", "container"];

/// Classify each line of `text`; unmatched lines are dropped.
pub fn extract_elements(text: &str) -> Vec<Element> {
    text.split('\n').filter_map(classify_line).collect()
}

fn classify_line(line: &str) -> Option<Element> {
    let matches = |keywords: &[&str]| keywords.iter().any(|k| line.contains(k));

    let kind = if matches(HEADER_KEYWORDS) {
        ElementKind::Header
    } else if matches(FOOTER_KEYWORDS) {
        ElementKind::Footer
    } else if matches(SECTION_KEYWORDS) {
        ElementKind::Section
    } else {
        return None;
    };

    Some(Element::new(kind, line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_one_of_each_in_line_order() {
        let elements =
            extract_elements("The header has a logo\nA footer sits below\nBody section contains text");
        let kinds: Vec<ElementKind> = elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Header, ElementKind::Footer, ElementKind::Section]
        );
        assert_eq!(elements[0].description, "The header has a logo");
    }

    #[test]
    fn test_header_wins_over_footer_on_same_line() {
        let elements = extract_elements("navigation links repeat in the footer");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Header);
    }

    #[test]
    fn test_container_is_section() {
        let elements = extract_elements("  A centered container holds cards  ");
        assert_eq!(elements[0].kind, ElementKind::Section);
        assert_eq!(elements[0].description, "A centered container holds cards");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(extract_elements("The Header is bold\nFOOTER").is_empty());
    }

    #[test]
    fn test_unmatched_lines_dropped() {
        let elements = extract_elements("Blue palette\n\nsans-serif fonts\nhero section");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Section);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_elements("").is_empty());
    }
}
