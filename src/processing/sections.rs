//! Splitting raw analysis text into `##` sections

use serde::{Deserialize, Serialize};

/// Heading marker the analysis prompt asks the model to use
pub const HEADING_MARKER: &str = "##";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Split text on every heading marker, keeping input order.
///
/// Fragments that are blank after trimming are dropped. The first line of a
/// fragment is its title, the remaining lines form the content.
pub fn split_sections(text: &str) -> Vec<Section> {
    text.split(HEADING_MARKER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let mut lines = fragment.split('\n');
            let title = lines.next().unwrap_or_default().trim().to_string();
            let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
            Section { title, content }
        })
        .collect()
}

/// First section whose title contains `needle`, case-insensitively
pub fn find_section<'a>(sections: &'a [Section], needle: &str) -> Option<&'a Section> {
    sections.iter().find(|section| section.title_contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order_and_content() {
        let text = "## Overall Match Score\n**Score:** 80/100%\n\n## Key Strengths\n- **Rust:** expert\n- **Go:** familiar\n";
        let sections = split_sections(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Overall Match Score");
        assert_eq!(sections[0].content, "**Score:** 80/100%");
        assert_eq!(sections[1].title, "Key Strengths");
        assert_eq!(sections[1].content, "- **Rust:** expert\n- **Go:** familiar");
    }

    #[test]
    fn test_split_drops_blank_fragments() {
        let sections = split_sections("##\n\n##   ## Title only");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Title only");
        assert!(sections[0].content.is_empty());
    }

    #[test]
    fn test_preamble_before_first_heading_is_a_section() {
        let sections = split_sections("Intro line\nmore\n## Next\nbody");
        assert_eq!(sections[0].title, "Intro line");
        assert_eq!(sections[0].content, "more");
        assert_eq!(sections[1].title, "Next");
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("   \n\t ").is_empty());
    }

    #[test]
    fn test_find_section_is_case_insensitive() {
        let sections = split_sections("## KEY STRENGTHS\n- a\n## Areas for Improvement\n- b");
        assert!(find_section(&sections, "key strengths").is_some());
        assert_eq!(
            find_section(&sections, "areas for improvement").map(|s| s.content.as_str()),
            Some("- b")
        );
        assert!(find_section(&sections, "action plan").is_none());
    }
}
