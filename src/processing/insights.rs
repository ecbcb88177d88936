//! Benchmarks and threshold insights derived from the score set

use crate::processing::scores::{Metric, ScoreSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

pub const STRONG_MATCH_MESSAGE: &str =
    "Excellent overall match! Your resume strongly aligns with the job requirements.";
pub const SIGNIFICANT_GAPS_MESSAGE: &str =
    "Significant alignment gaps detected. Major improvements needed to match job requirements.";
pub const MISSING_SKILLS_MESSAGE: &str =
    "Critical skills gap identified. Focus on acquiring key technical skills mentioned in the job posting.";
pub const ATS_OPTIMIZATION_MESSAGE: &str =
    "ATS optimization needed. Your resume may not pass automated screening systems effectively.";
pub const LOW_KEYWORD_DENSITY_MESSAGE: &str =
    "Low keyword density. Incorporate more job-specific terms from the posting.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub category: String,
    pub current: u8,
    pub target: u8,
}

impl ComparisonEntry {
    /// Points still missing to reach the target
    pub fn gap(&self) -> u8 {
        self.target.saturating_sub(self.current)
    }
}

const BENCHMARKS: [(&str, Metric, u8); 6] = [
    ("Overall Match", Metric::Overall, 90),
    ("Skills Gap", Metric::Skills, 85),
    ("Keywords", Metric::KeywordMatch, 80),
    ("ATS Score", Metric::Ats, 95),
    ("Experience", Metric::Experience, 85),
    ("Market Ready", Metric::MarketCompetitiveness, 85),
];

pub fn build_comparisons(scores: &ScoreSet) -> Vec<ComparisonEntry> {
    BENCHMARKS
        .iter()
        .map(|&(category, metric, target)| ComparisonEntry {
            category: category.to_string(),
            current: scores.get(metric),
            target,
        })
        .collect()
}

/// Threshold rules evaluated in a fixed order; any number may fire.
pub fn synthesize_insights(scores: &ScoreSet) -> Vec<Insight> {
    let mut insights = Vec::new();

    if scores.overall >= 80 {
        insights.push(Insight::new(InsightKind::Positive, STRONG_MATCH_MESSAGE));
    } else if scores.overall < 50 {
        insights.push(Insight::new(InsightKind::Critical, SIGNIFICANT_GAPS_MESSAGE));
    }

    if scores.skills < 60 {
        insights.push(Insight::new(InsightKind::Critical, MISSING_SKILLS_MESSAGE));
    }

    if scores.ats < 70 {
        insights.push(Insight::new(InsightKind::Warning, ATS_OPTIMIZATION_MESSAGE));
    }

    if scores.keyword_match < 50 {
        insights.push(Insight::new(InsightKind::Warning, LOW_KEYWORD_DENSITY_MESSAGE));
    }

    insights
}
