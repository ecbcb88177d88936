//! Dashboard report combining the parsed analysis with run metadata

use crate::config::InputConfig;
use crate::llm::fallback::AnalysisOutcome;
use crate::processing::analyzer::ParsedAnalysis;
use crate::processing::lists::{ActionItem, Priority};
use crate::processing::scores::ScoreSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Everything a formatter needs to render one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub analysis: ParsedAnalysis,
    pub tier: ScoreTier,
    /// Parsed action items, or the score-derived default plan when none were found
    pub action_plan: Vec<ActionItem>,
    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_source: String,
    pub job_source: String,
    pub model_used: Option<String>,
    pub used_fallback: bool,
    pub fallback_reason: Option<String>,
    pub processing_time_ms: u64,
    pub resume_preview: String,
    pub job_preview: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreTier {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            80..=u8::MAX => ScoreTier::Excellent,
            60..=79 => ScoreTier::Good,
            _ => ScoreTier::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent Match",
            ScoreTier::Good => "Good Foundation",
            ScoreTier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "tier-excellent",
            ScoreTier::Good => "tier-good",
            ScoreTier::NeedsImprovement => "tier-poor",
        }
    }
}

/// Immediate actions implied by weak scores
pub fn default_action_plan(scores: &ScoreSet) -> Vec<ActionItem> {
    let mut plan = Vec::new();
    if scores.skills < 70 {
        plan.push(ActionItem::new(
            Priority::High,
            "Add missing technical skills from job requirements",
        ));
    }
    if scores.keyword_match < 60 {
        plan.push(ActionItem::new(
            Priority::High,
            "Incorporate job-specific keywords throughout resume",
        ));
    }
    if scores.ats < 70 {
        plan.push(ActionItem::new(
            Priority::High,
            "Optimize resume format for ATS compatibility",
        ));
    }
    plan
}

/// First `max_chars` graphemes, with `...` appended when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max_chars).collect();
    if graphemes.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            model_used: None,
            used_fallback: false,
            fallback_reason: None,
            processing_time_ms: 0,
            resume_preview: String::new(),
            job_preview: String::new(),
        }
    }

    pub fn with_previews(mut self, resume_text: &str, job_text: &str, config: &InputConfig) -> Self {
        self.resume_preview = preview(resume_text, config.resume_preview_chars);
        self.job_preview = preview(job_text, config.job_preview_chars);
        self
    }

    pub fn with_outcome(mut self, outcome: &AnalysisOutcome) -> Self {
        self.model_used = outcome.model_used.clone();
        self.used_fallback = outcome.used_fallback;
        self.fallback_reason = outcome.fallback_reason.clone();
        self
    }

    pub fn with_processing_time(mut self, elapsed: Duration) -> Self {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self
    }
}

impl DashboardReport {
    pub fn new(analysis: ParsedAnalysis, metadata: ReportMetadata) -> Self {
        let tier = ScoreTier::from_score(analysis.scores.overall);
        let action_plan = if analysis.has_action_items() {
            analysis.action_items.clone()
        } else {
            default_action_plan(&analysis.scores)
        };

        Self {
            analysis,
            tier,
            action_plan,
            metadata,
        }
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.analysis.scores
    }

    /// Whether the action plan came from the score defaults
    pub fn uses_default_plan(&self) -> bool {
        !self.analysis.has_action_items()
    }

    pub fn action_items_with(&self, priority: Priority) -> impl Iterator<Item = &ActionItem> {
        self.action_plan.iter().filter(move |item| item.priority == priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::parse_analysis;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(79), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(60), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(59), ScoreTier::NeedsImprovement);
        assert_eq!(ScoreTier::from_score(0).label(), "Needs Improvement");
    }

    #[test]
    fn test_default_plan_thresholds() {
        let weak = ScoreSet {
            skills: 69,
            keyword_match: 59,
            ats: 69,
            ..ScoreSet::default()
        };
        let items: Vec<_> = default_action_plan(&weak).into_iter().map(|i| i.item).collect();
        assert_eq!(
            items,
            vec![
                "Add missing technical skills from job requirements",
                "Incorporate job-specific keywords throughout resume",
                "Optimize resume format for ATS compatibility",
            ]
        );

        let strong = ScoreSet {
            skills: 70,
            keyword_match: 60,
            ats: 70,
            ..ScoreSet::default()
        };
        assert!(default_action_plan(&strong).is_empty());
    }

    #[test]
    fn test_report_falls_back_to_default_plan() {
        let analysis = parse_analysis("**Skill Gap Score:** 40/100%");
        let report = DashboardReport::new(analysis, ReportMetadata::new("cv.txt", "job.txt"));

        assert!(report.uses_default_plan());
        assert_eq!(report.action_plan.len(), 1);
        assert_eq!(report.action_plan[0].priority, Priority::High);
        assert_eq!(report.tier, ScoreTier::Good);
    }

    #[test]
    fn test_parsed_plan_is_kept() {
        let analysis = parse_analysis("**Long-term:**\n- Learn Go");
        let report = DashboardReport::new(analysis, ReportMetadata::new("cv.txt", "job.txt"));

        assert!(!report.uses_default_plan());
        assert_eq!(report.action_items_with(Priority::Low).count(), 1);
    }

    #[test]
    fn test_preview_truncates_on_graphemes() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("e\u{301}e\u{301}e\u{301}", 2), "e\u{301}e\u{301}...");
        assert_eq!(preview("", 5), "");
    }
}
