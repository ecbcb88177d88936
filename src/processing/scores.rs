//! Numeric score extraction from raw analysis text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The fixed set of metrics the dashboard reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Overall,
    Skills,
    Ats,
    Experience,
    Education,
    KeywordMatch,
    InterviewReadiness,
    MarketCompetitiveness,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Overall,
        Metric::Skills,
        Metric::Ats,
        Metric::Experience,
        Metric::Education,
        Metric::KeywordMatch,
        Metric::InterviewReadiness,
        Metric::MarketCompetitiveness,
    ];

    /// Value used when the text carries no usable score for this metric
    pub fn default_score(self) -> u8 {
        match self {
            Metric::Overall => 75,
            Metric::Skills => 70,
            Metric::Ats => 70,
            Metric::Experience => 80,
            Metric::Education => 85,
            Metric::KeywordMatch => 65,
            Metric::InterviewReadiness => 75,
            Metric::MarketCompetitiveness => 75,
        }
    }

    /// Label synonyms as a regex alternation. `.*` stays on one line.
    fn label_pattern(self) -> &'static str {
        match self {
            Metric::Overall => r"Overall.*Score|Match.*Score",
            Metric::Skills => r"Skill.*Gap.*Score|Skills.*Score|Technical.*Skills",
            Metric::Ats => r"ATS.*Score|ATS.*Compatibility",
            Metric::Experience => r"Experience.*Score|Years.*Experience",
            Metric::Education => r"Education.*Score",
            Metric::KeywordMatch => r"Keyword.*Match.*Rate",
            Metric::InterviewReadiness => r"Interview.*Readiness|Story.*Preparation",
            Metric::MarketCompetitiveness => r"Hiring.*Probability|Market.*Competitive|Competition",
        }
    }

    /// Label written by [`ScoreSet::to_labeled_text`]; parses back to this metric.
    pub fn canonical_label(self) -> &'static str {
        match self {
            Metric::Overall => "Overall Match Score",
            Metric::Skills => "Skill Gap Score",
            Metric::Ats => "ATS Compatibility Score",
            Metric::Experience => "Experience Score",
            Metric::Education => "Education Score",
            Metric::KeywordMatch => "Keyword Match Rate",
            Metric::InterviewReadiness => "Interview Readiness",
            Metric::MarketCompetitiveness => "Hiring Probability",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Overall => "Overall Match",
            Metric::Skills => "Skills Match",
            Metric::Ats => "ATS Score",
            Metric::Experience => "Experience",
            Metric::Education => "Education",
            Metric::KeywordMatch => "Keyword Match",
            Metric::InterviewReadiness => "Interview Readiness",
            Metric::MarketCompetitiveness => "Market Competitiveness",
        };
        f.write_str(name)
    }
}

/// One integer in [0, 100] per metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub overall: u8,
    pub skills: u8,
    pub ats: u8,
    pub experience: u8,
    pub education: u8,
    pub keyword_match: u8,
    pub interview_readiness: u8,
    pub market_competitiveness: u8,
}

impl Default for ScoreSet {
    fn default() -> Self {
        Self {
            overall: Metric::Overall.default_score(),
            skills: Metric::Skills.default_score(),
            ats: Metric::Ats.default_score(),
            experience: Metric::Experience.default_score(),
            education: Metric::Education.default_score(),
            keyword_match: Metric::KeywordMatch.default_score(),
            interview_readiness: Metric::InterviewReadiness.default_score(),
            market_competitiveness: Metric::MarketCompetitiveness.default_score(),
        }
    }
}

impl ScoreSet {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Overall => self.overall,
            Metric::Skills => self.skills,
            Metric::Ats => self.ats,
            Metric::Experience => self.experience,
            Metric::Education => self.education,
            Metric::KeywordMatch => self.keyword_match,
            Metric::InterviewReadiness => self.interview_readiness,
            Metric::MarketCompetitiveness => self.market_competitiveness,
        }
    }

    pub fn set(&mut self, metric: Metric, score: u8) {
        let score = score.min(100);
        match metric {
            Metric::Overall => self.overall = score,
            Metric::Skills => self.skills = score,
            Metric::Ats => self.ats = score,
            Metric::Experience => self.experience = score,
            Metric::Education => self.education = score,
            Metric::KeywordMatch => self.keyword_match = score,
            Metric::InterviewReadiness => self.interview_readiness = score,
            Metric::MarketCompetitiveness => self.market_competitiveness = score,
        }
    }

    /// Render every score in the bold label format the extractor reads.
    pub fn to_labeled_text(&self) -> String {
        Metric::ALL
            .iter()
            .map(|&metric| format!("**{}:** {}/100%", metric.canonical_label(), self.get(metric)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

static SCORE_PATTERNS: LazyLock<Vec<(Metric, Regex)>> = LazyLock::new(|| {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let pattern = format!(
                r"(?i)(?:{}):?\s*[^0-9]*([0-9]+(?:\.[0-9]+)?)[%/]?",
                metric.label_pattern()
            );
            let regex = Regex::new(&pattern).expect("score label pattern is a valid regex");
            (metric, regex)
        })
        .collect()
});

static SKILLS_FOUND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Technical Skills Found.*?([0-9]+)\s*out\s*of\s*([0-9]+)")
        .expect("skills-found pattern is a valid regex")
});

/// Round and clamp into the score range. Digit runs too long for an integer
/// still parse as a (huge) float and end up at 100.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Score for one metric, or `None` when no label with a trailing number exists.
pub fn extract_metric(text: &str, metric: Metric) -> Option<u8> {
    let regex = SCORE_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == metric)
        .map(|(_, regex)| regex)?;

    let number = regex.captures(text)?.get(1)?.as_str();
    let digits = number.split('.').next()?;
    let value = digits.parse::<f64>().ok()?;
    Some(clamp_score(value))
}

/// `Technical Skills Found: X out of Y` as a percentage. Skipped when Y is zero.
pub fn technical_skills_ratio(text: &str) -> Option<u8> {
    let captures = SKILLS_FOUND_PATTERN.captures(text)?;
    let found = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let total = captures.get(2)?.as_str().parse::<f64>().ok()?;
    if total == 0.0 {
        return None;
    }
    Some(clamp_score(100.0 * found / total))
}

/// Extract every metric independently from the full text
pub fn extract_scores(text: &str) -> ScoreSet {
    let mut scores = ScoreSet::default();
    for metric in Metric::ALL {
        if let Some(score) = extract_metric(text, metric) {
            scores.set(metric, score);
        }
    }
    if let Some(ratio) = technical_skills_ratio(text) {
        scores.skills = ratio;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_input() {
        assert_eq!(extract_scores(""), ScoreSet::default());
        assert_eq!(extract_scores("  \n\t  "), ScoreSet::default());

        let defaults = ScoreSet::default();
        assert_eq!(defaults.overall, 75);
        assert_eq!(defaults.skills, 70);
        assert_eq!(defaults.ats, 70);
        assert_eq!(defaults.experience, 80);
        assert_eq!(defaults.education, 85);
        assert_eq!(defaults.keyword_match, 65);
        assert_eq!(defaults.interview_readiness, 75);
        assert_eq!(defaults.market_competitiveness, 75);
    }

    #[test]
    fn test_overall_from_heading_and_bold_score() {
        let scores = extract_scores("## Overall Match Score\n**Score:** 42/100%\n");
        assert_eq!(scores.overall, 42);
    }

    #[test]
    fn test_technical_skills_found_overrides_skill_score() {
        let text = "**Skill Gap Score:** 90/100%\n**Technical Skills Found:** 6 out of 10 required skills";
        assert_eq!(extract_scores(text).skills, 60);
        assert_eq!(extract_scores("Technical Skills Found: 6 out of 10").skills, 60);
    }

    #[test]
    fn test_skills_ratio_rounds() {
        assert_eq!(technical_skills_ratio("Technical Skills Found: 2 out of 3"), Some(67));
        assert_eq!(technical_skills_ratio("Technical Skills Found: 1 out of 8"), Some(13));
    }

    #[test]
    fn test_zero_total_skills_is_ignored() {
        let text = "**Skill Gap Score:** 55%\nTechnical Skills Found: 3 out of 0";
        assert_eq!(technical_skills_ratio(text), None);
        assert_eq!(extract_scores(text).skills, 55);
    }

    #[test]
    fn test_scores_are_clamped() {
        assert_eq!(extract_scores("Overall Score: 150%").overall, 100);
        assert_eq!(extract_scores("Technical Skills Found: 12 out of 10").skills, 100);
        assert_eq!(
            extract_scores("Education Score: 99999999999999999999999999%").education,
            100
        );
    }

    #[test]
    fn test_negative_sign_is_not_represented() {
        assert_eq!(extract_scores("Overall Score: -5%").overall, 5);
    }

    #[test]
    fn test_decimal_uses_integer_digit_run() {
        assert_eq!(extract_scores("ATS Compatibility Score: 72.9%").ats, 72);
    }

    #[test]
    fn test_label_without_any_number_uses_default() {
        let scores = extract_scores("## Overall Match Score\nNo number given here");
        assert_eq!(scores.overall, 75);
    }

    #[test]
    fn test_non_digit_run_may_cross_lines() {
        let text = "## Keywords & ATS Optimization\n**Keyword Match Rate:**\nroughly\n48% of keywords";
        assert_eq!(extract_scores(text).keyword_match, 48);
    }

    #[test]
    fn test_each_synonym_is_recognised() {
        assert_eq!(extract_metric("Match Score: 61", Metric::Overall), Some(61));
        assert_eq!(extract_metric("Skills Score = 44", Metric::Skills), Some(44));
        assert_eq!(extract_metric("ATS Score 88", Metric::Ats), Some(88));
        assert_eq!(extract_metric("Years of Relevant Experience: 7 years", Metric::Experience), Some(7));
        assert_eq!(extract_metric("Story Preparation: 8/10", Metric::InterviewReadiness), Some(8));
        assert_eq!(extract_metric("Market Competitiveness 66%", Metric::MarketCompetitiveness), Some(66));
        assert_eq!(extract_metric("competition index 12", Metric::MarketCompetitiveness), Some(12));
        assert_eq!(extract_metric("no labels at all 50", Metric::Education), None);
    }

    #[test]
    fn test_labeled_text_round_trips() {
        let mut scores = ScoreSet::default();
        scores.set(Metric::Overall, 42);
        scores.set(Metric::Skills, 60);
        scores.set(Metric::Ats, 0);
        scores.set(Metric::Experience, 100);
        scores.set(Metric::Education, 33);
        scores.set(Metric::KeywordMatch, 47);
        scores.set(Metric::InterviewReadiness, 9);
        scores.set(Metric::MarketCompetitiveness, 81);

        let rendered = scores.to_labeled_text();
        assert_eq!(extract_scores(&rendered), scores);

        let reparsed = extract_scores(&extract_scores(&rendered).to_labeled_text());
        assert_eq!(reparsed, scores);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut scores = ScoreSet::default();
        scores.set(Metric::Ats, 250);
        assert_eq!(scores.ats, 100);
    }
}
