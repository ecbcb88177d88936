//! Skill entries from bold `**Name:** proficiency` tokens

use crate::processing::scores::ScoreSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Most skill entries kept for the radar chart
pub const MAX_SKILLS: usize = 8;

/// Below this many extracted entries the metric-derived entries are prepended
pub const MIN_EXTRACTED_SKILLS: usize = 5;

const UNRATED_SCORE: u8 = 50;

/// Checked in order; the first keyword contained in the description wins.
const PROFICIENCY_SCORES: [(&str, u8); 5] = [
    ("expert", 95),
    ("proficient", 85),
    ("advanced", 90),
    ("familiar", 60),
    ("beginner", 40),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: String,
    pub score: u8,
}

impl SkillEntry {
    pub fn new(skill: impl Into<String>, score: u8) -> Self {
        Self {
            skill: skill.into(),
            score: score.min(100),
        }
    }
}

static BOLD_PAIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^:*\n]+):\*\*[ \t]*([^\n]*)").expect("bold pair pattern is a valid regex")
});

/// Map a free-text proficiency phrase to a score
pub fn proficiency_score(description: &str) -> u8 {
    let description = description.to_lowercase();
    PROFICIENCY_SCORES
        .iter()
        .find(|(keyword, _)| description.contains(keyword))
        .map(|&(_, score)| score)
        .unwrap_or(UNRATED_SCORE)
}

/// Bold `**Name:** text` tokens in order of appearance, at most [`MAX_SKILLS`]
pub fn extract_rated_skills(text: &str) -> Vec<SkillEntry> {
    BOLD_PAIR_PATTERN
        .captures_iter(text)
        .take(MAX_SKILLS)
        .filter_map(|captures| {
            let name = captures.get(1)?.as_str().trim();
            let description = captures.get(2).map_or("", |m| m.as_str());
            Some(SkillEntry::new(name, proficiency_score(description)))
        })
        .collect()
}

/// Entries derived from already-computed metrics
pub fn metric_skill_entries(scores: &ScoreSet) -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("Technical Skills", scores.skills),
        SkillEntry::new("Experience", scores.experience),
        SkillEntry::new("Education", scores.education),
        SkillEntry::new("Keywords", scores.keyword_match),
        SkillEntry::new("ATS Optimization", scores.ats),
        SkillEntry::new("Interview Readiness", scores.interview_readiness),
    ]
}

/// Skill entries for the dashboard, padded from the metrics when the text
/// has too few rated tokens.
pub fn extract_skills(text: &str, scores: &ScoreSet) -> Vec<SkillEntry> {
    let extracted = extract_rated_skills(text);
    if extracted.len() >= MIN_EXTRACTED_SKILLS {
        return extracted;
    }

    let mut skills = metric_skill_entries(scores);
    skills.extend(extracted);
    skills.truncate(MAX_SKILLS);
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_priority() {
        assert_eq!(proficiency_score("Expert level"), 95);
        assert_eq!(proficiency_score("proficient, some advanced work"), 85);
        assert_eq!(proficiency_score("Advanced"), 90);
        assert_eq!(proficiency_score("familiar with basics"), 60);
        assert_eq!(proficiency_score("BEGINNER"), 40);
        assert_eq!(proficiency_score("three years of use"), 50);
        assert_eq!(proficiency_score("beginner moving to expert"), 95);
    }

    #[test]
    fn test_extracts_in_order_and_caps_at_eight() {
        let text = (1..=10)
            .map(|i| format!("- **Skill{}:** advanced", i))
            .collect::<Vec<_>>()
            .join("\n");
        let skills = extract_rated_skills(&text);

        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], SkillEntry::new("Skill1", 90));
        assert_eq!(skills[7].skill, "Skill8");
    }

    #[test]
    fn test_description_stays_on_its_line() {
        let text = "**Rust:** used daily\n**Go:** expert";
        let skills = extract_rated_skills(text);
        assert_eq!(skills, vec![SkillEntry::new("Rust", 50), SkillEntry::new("Go", 95)]);
    }

    #[test]
    fn test_enough_extracted_skills_are_used_as_is() {
        let text = "**A:** expert\n**B:** proficient\n**C:** advanced\n**D:** familiar\n**E:** beginner";
        let skills = extract_skills(text, &ScoreSet::default());
        let names: Vec<_> = skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        let scores: Vec<_> = skills.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![95, 85, 90, 60, 40]);
    }

    #[test]
    fn test_few_skills_are_padded_from_metrics() {
        let text = "**Python:** proficient\n**SQL:** familiar\n**Docker:** beginner";
        let scores = ScoreSet {
            skills: 61,
            ..ScoreSet::default()
        };
        let skills = extract_skills(text, &scores);

        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], SkillEntry::new("Technical Skills", 61));
        assert_eq!(skills[5], SkillEntry::new("Interview Readiness", 75));
        assert_eq!(skills[6], SkillEntry::new("Python", 85));
        assert_eq!(skills[7], SkillEntry::new("SQL", 60));
    }

    #[test]
    fn test_no_skills_yields_metric_entries_only() {
        let skills = extract_skills("", &ScoreSet::default());
        assert_eq!(skills.len(), 6);
        assert_eq!(skills[3], SkillEntry::new("Keywords", 65));
        assert_eq!(skills[4], SkillEntry::new("ATS Optimization", 70));
    }
}
