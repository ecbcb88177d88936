//! Strengths, improvements and prioritized action items

use crate::processing::sections::{find_section, split_sections, Section};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const STRENGTHS_TITLE: &str = "Key Strengths";
pub const IMPROVEMENTS_TITLE: &str = "Areas for Improvement";
pub const ACTION_PLAN_TITLE: &str = "Recommended Action Plan";

pub const DEFAULT_STRENGTHS: [&str; 5] = [
    "Professional experience alignment",
    "Educational background relevance",
    "Clear resume structure",
    "Quantified achievements present",
    "Industry-specific terminology",
];

pub const DEFAULT_IMPROVEMENTS: [&str; 5] = [
    "Enhance keyword optimization",
    "Add more quantified metrics",
    "Strengthen skills section",
    "Improve ATS compatibility",
    "Expand technical proficiency details",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn timeline(self) -> &'static str {
        match self {
            Priority::High => "1-2 days",
            Priority::Medium => "1-2 weeks",
            Priority::Low => "1-3 months",
        }
    }

    /// Group a bold plan label opens, if any
    fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("immediate") {
            Some(Priority::High)
        } else if label.contains("short-term") || label.contains("short term") {
            Some(Priority::Medium)
        } else if label.contains("long-term") || label.contains("long term") {
            Some(Priority::Low)
        } else {
            None
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: Priority,
    pub item: String,
    pub timeline: String,
}

impl ActionItem {
    pub fn new(priority: Priority, item: impl Into<String>) -> Self {
        Self {
            priority,
            item: item.into(),
            timeline: priority.timeline().to_string(),
        }
    }
}

static BOLD_BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*•][ \t]+\*\*([^:*\n]+):\*\*[ \t]*(.*)$")
        .expect("bold bullet pattern is a valid regex")
});

static PLAN_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+)\*\*").expect("plan label pattern is a valid regex")
});

/// Text after a `- `, `* ` or `• ` bullet marker
fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim_start();
    ["- ", "* ", "• "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

/// `- **Key:** value` bullets formatted as `Key: value`
pub fn bold_bullets(content: &str) -> Vec<String> {
    BOLD_BULLET_PATTERN
        .captures_iter(content)
        .filter_map(|captures| {
            let key = captures.get(1)?.as_str().trim();
            let value = captures.get(2).map_or("", |m| m.as_str().trim());
            Some(format!("{}: {}", key, value).trim_end().to_string())
        })
        .collect()
}

fn named_list_or_default(sections: &[Section], title: &str, defaults: &[&str]) -> Vec<String> {
    let items = find_section(sections, title)
        .map(|section| bold_bullets(&section.content))
        .unwrap_or_default();

    if items.is_empty() {
        defaults.iter().map(|item| item.to_string()).collect()
    } else {
        items
    }
}

pub fn extract_strengths(sections: &[Section]) -> Vec<String> {
    named_list_or_default(sections, STRENGTHS_TITLE, &DEFAULT_STRENGTHS)
}

pub fn extract_improvements(sections: &[Section]) -> Vec<String> {
    named_list_or_default(sections, IMPROVEMENTS_TITLE, &DEFAULT_IMPROVEMENTS)
}

/// Bullets grouped by the bold Immediate / Short-term / Long-term labels
/// above them. Any other bold line closes the open group.
pub fn action_items_in(content: &str) -> Vec<ActionItem> {
    let mut grouped: [Vec<ActionItem>; 3] = Default::default();
    let mut current: Option<Priority> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("**") {
            // only the bold label picks the group, never the text after it
            current = PLAN_LABEL_PATTERN
                .captures(trimmed)
                .and_then(|captures| Priority::from_label(&captures[1]));
            continue;
        }

        let (Some(priority), Some(item)) = (current, strip_bullet(trimmed)) else {
            continue;
        };
        if item.is_empty() {
            continue;
        }

        let slot = match priority {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        };
        grouped[slot].push(ActionItem::new(priority, item));
    }

    grouped.into_iter().flatten().collect()
}

/// Action items from the action-plan section, or from the whole text when
/// that heading is missing. Empty is a valid result.
pub fn extract_action_items(text: &str, sections: &[Section]) -> Vec<ActionItem> {
    match find_section(sections, ACTION_PLAN_TITLE) {
        Some(section) => action_items_in(&section.content),
        None => action_items_in(text),
    }
}

/// Convenience for callers holding only the raw text
pub fn extract_action_items_from_text(text: &str) -> Vec<ActionItem> {
    extract_action_items(text, &split_sections(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let sections = split_sections("");
        assert_eq!(extract_strengths(&sections), DEFAULT_STRENGTHS.to_vec());
        assert_eq!(extract_improvements(&sections), DEFAULT_IMPROVEMENTS.to_vec());
    }

    #[test]
    fn test_defaults_when_section_has_no_bold_bullets() {
        let sections = split_sections("## Key Strengths\n- plain bullet without a label\n");
        assert_eq!(extract_strengths(&sections), DEFAULT_STRENGTHS.to_vec());
    }

    #[test]
    fn test_strengths_are_key_value_formatted() {
        let text = "## Key Strengths\n- **Leadership:** Led a team of 6\n- **Delivery:** Shipped on time\n## Areas for Improvement\n- **Priority 1:** Add metrics\n";
        let sections = split_sections(text);

        assert_eq!(
            extract_strengths(&sections),
            vec!["Leadership: Led a team of 6", "Delivery: Shipped on time"]
        );
        assert_eq!(extract_improvements(&sections), vec!["Priority 1: Add metrics"]);
    }

    #[test]
    fn test_strengths_stop_at_next_heading() {
        let text = "## Key Strengths\n- **A:** one\n## Other\n- **B:** two";
        assert_eq!(extract_strengths(&split_sections(text)), vec!["A: one"]);
    }

    #[test]
    fn test_immediate_only_plan() {
        let text = "## Recommended Action Plan\n**Immediate Changes:**\n- Add keywords\n- Quantify achievements\n";
        let items = extract_action_items_from_text(text);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.priority == Priority::High));
        assert!(items.iter().all(|i| i.timeline == "1-2 days"));
        assert_eq!(items[0].item, "Add keywords");
        assert_eq!(items[1].item, "Quantify achievements");
    }

    #[test]
    fn test_label_without_plan_heading_still_counts() {
        let items = extract_action_items_from_text("**Immediate Changes:**\n- First\n- Second");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.priority == Priority::High));
    }

    #[test]
    fn test_all_three_groups_keep_priority_order() {
        let text = "## Recommended Action Plan\n\
**Long-term Development (1-3 months):**\n- Learn Kubernetes\n\
**Immediate Changes (1-2 days):**\n- Fix typos\n\
**Short-term Improvements (1-2 weeks):**\n- Rewrite summary\n- Add projects\n";
        let items = extract_action_items_from_text(text);

        let summary: Vec<_> = items
            .iter()
            .map(|i| (i.priority, i.item.as_str(), i.timeline.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Priority::High, "Fix typos", "1-2 days"),
                (Priority::Medium, "Rewrite summary", "1-2 weeks"),
                (Priority::Medium, "Add projects", "1-2 weeks"),
                (Priority::Low, "Learn Kubernetes", "1-3 months"),
            ]
        );
    }

    #[test]
    fn test_unrelated_bold_label_closes_group() {
        let text = "## Recommended Action Plan\n**Immediate Changes:**\n- One\n**Notes:**\n- Not an action\n";
        let items = extract_action_items_from_text(text);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_group_keyword_after_label_does_not_open_group() {
        let text = "## Recommended Action Plan\n**Focus:** long-term thinking matters\n- Not an action\n";
        assert!(extract_action_items_from_text(text).is_empty());

        let text = "## Recommended Action Plan\n**Immediate Changes:**\n- Kept\n**Notes:** short-term wins first\n- Dropped\n";
        let items = extract_action_items_from_text(text);
        assert_eq!(items, vec![ActionItem::new(Priority::High, "Kept")]);
    }

    #[test]
    fn test_bullets_outside_groups_are_ignored() {
        let text = "## Recommended Action Plan\n- Loose bullet\n**Short-term:**\n\n- Kept\n";
        let items = extract_action_items_from_text(text);
        assert_eq!(items, vec![ActionItem::new(Priority::Medium, "Kept")]);
    }

    #[test]
    fn test_empty_plan_is_valid() {
        assert!(extract_action_items_from_text("## Recommended Action Plan\nNothing yet").is_empty());
        assert!(extract_action_items_from_text("").is_empty());
    }
}
