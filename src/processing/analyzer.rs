//! Response parser turning raw model output into the dashboard record

use crate::processing::insights::{build_comparisons, synthesize_insights, ComparisonEntry, Insight};
use crate::processing::lists::{extract_action_items, extract_improvements, extract_strengths, ActionItem};
use crate::processing::scores::{extract_scores, ScoreSet};
use crate::processing::sections::{split_sections, Section};
use crate::processing::skills::{extract_skills, SkillEntry};
use serde::{Deserialize, Serialize};

/// Everything the dashboard renders, derived from one analysis text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAnalysis {
    pub scores: ScoreSet,
    pub sections: Vec<Section>,
    pub skills: Vec<SkillEntry>,
    pub comparisons: Vec<ComparisonEntry>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub insights: Vec<Insight>,
}

impl ParsedAnalysis {
    pub fn has_action_items(&self) -> bool {
        !self.action_items.is_empty()
    }
}

/// Parse raw analysis text. Never fails: anything missing or garbled falls
/// back to the documented defaults.
pub fn parse_analysis(text: &str) -> ParsedAnalysis {
    let sections = split_sections(text);
    let scores = extract_scores(text);

    let parsed = ParsedAnalysis {
        skills: extract_skills(text, &scores),
        comparisons: build_comparisons(&scores),
        strengths: extract_strengths(&sections),
        improvements: extract_improvements(&sections),
        action_items: extract_action_items(text, &sections),
        insights: synthesize_insights(&scores),
        scores,
        sections,
    };

    log::debug!(
        "Parsed analysis: {} sections, {} skills, {} action items, {} insights",
        parsed.sections.len(),
        parsed.skills.len(),
        parsed.action_items.len(),
        parsed.insights.len()
    );

    parsed
}
