//! Line-level classification of section content for rendering

use crate::processing::scores::clamp_score;
use crate::processing::skills::proficiency_score;
use regex::Regex;
use std::sync::LazyLock;

static SKILL_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^:*]+):\*\*\s*(.*)$").expect("skill line pattern is a valid regex")
});

static PERCENTAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)(?:\s*out\s*of\s*([0-9]+)|%|\s*/\s*100)")
        .expect("percentage pattern is a valid regex")
});

const SCORE_MARKERS: [&str; 4] = ["Score:", "Rate:", "%", "out of"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    Bullet(String),
    SkillRating {
        name: String,
        proficiency: String,
        score: u8,
    },
    Heading(String),
    Score {
        text: String,
        percentage: Option<u8>,
    },
    Paragraph(String),
}

/// Percentage from `X out of Y`, `X%` or `X/100`, whichever comes first
pub fn line_percentage(line: &str) -> Option<u8> {
    let captures = PERCENTAGE_PATTERN.captures(line)?;
    let value = captures.get(1)?.as_str().parse::<f64>().ok()?;
    match captures.get(2) {
        Some(total) => {
            let total = total.as_str().parse::<f64>().ok()?;
            if total == 0.0 {
                None
            } else {
                Some(clamp_score(100.0 * value / total))
            }
        }
        None => Some(clamp_score(value)),
    }
}

fn is_score_line(line: &str) -> bool {
    SCORE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Classify one content line; blank lines yield `None`.
///
/// A bold `**Key:** value` line carrying a score expression renders as a
/// score line, otherwise as a skill rating.
pub fn classify_line(line: &str) -> Option<ContentLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(text) = ["- ", "* ", "• "].iter().find_map(|marker| line.strip_prefix(marker)) {
        return Some(ContentLine::Bullet(text.trim().to_string()));
    }

    if let Some(captures) = SKILL_LINE_PATTERN.captures(line) {
        let name = captures[1].trim().to_string();
        let proficiency = captures[2].trim().to_string();
        if proficiency.is_empty() {
            return Some(ContentLine::Heading(name));
        }
        if !is_score_line(line) {
            let score = proficiency_score(&proficiency);
            return Some(ContentLine::SkillRating {
                name,
                proficiency,
                score,
            });
        }
    }

    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        let text = line.trim_start_matches("**").trim_end_matches("**").trim();
        return Some(ContentLine::Heading(text.to_string()));
    }

    if is_score_line(line) {
        return Some(ContentLine::Score {
            text: line.to_string(),
            percentage: line_percentage(line),
        });
    }

    Some(ContentLine::Paragraph(line.to_string()))
}

pub fn classify_content(content: &str) -> Vec<ContentLine> {
    content.lines().filter_map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets() {
        assert_eq!(
            classify_line("  - Add keywords "),
            Some(ContentLine::Bullet("Add keywords".to_string()))
        );
        assert_eq!(
            classify_line("• Quantify wins"),
            Some(ContentLine::Bullet("Quantify wins".to_string()))
        );
    }

    #[test]
    fn test_skill_rating() {
        assert_eq!(
            classify_line("**Python:** Expert (5 years)"),
            Some(ContentLine::SkillRating {
                name: "Python".to_string(),
                proficiency: "Expert (5 years)".to_string(),
                score: 95,
            })
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            classify_line("**Immediate Changes (1-2 days):**"),
            Some(ContentLine::Heading("Immediate Changes (1-2 days)".to_string()))
        );
        assert_eq!(
            classify_line("**Summary**"),
            Some(ContentLine::Heading("Summary".to_string()))
        );
    }

    #[test]
    fn test_score_lines() {
        assert_eq!(
            classify_line("**Score:** 82/100%"),
            Some(ContentLine::Score {
                text: "**Score:** 82/100%".to_string(),
                percentage: Some(82),
            })
        );
        assert_eq!(
            classify_line("**Technical Skills Found:** 6 out of 8 required skills"),
            Some(ContentLine::Score {
                text: "**Technical Skills Found:** 6 out of 8 required skills".to_string(),
                percentage: Some(75),
            })
        );
        assert_eq!(
            classify_line("Keyword overlap is 48%"),
            Some(ContentLine::Score {
                text: "Keyword overlap is 48%".to_string(),
                percentage: Some(48),
            })
        );
    }

    #[test]
    fn test_percentage_edge_cases() {
        assert_eq!(line_percentage("3 out of 0"), None);
        assert_eq!(line_percentage("250%"), Some(100));
        assert_eq!(line_percentage("no numbers"), None);
        assert_eq!(line_percentage("7/10"), None);
    }

    #[test]
    fn test_paragraph_and_blank() {
        assert_eq!(classify_line("   "), None);
        assert_eq!(
            classify_line("Plain sentence."),
            Some(ContentLine::Paragraph("Plain sentence.".to_string()))
        );
        assert_eq!(classify_content("a\n\n- b\n").len(), 2);
    }
}
