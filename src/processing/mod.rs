//! Parsing of raw analysis text into scores, skills, lists and insights

pub mod analyzer;
pub mod insights;
pub mod lists;
pub mod scores;
pub mod sections;
pub mod skills;

pub use analyzer::{parse_analysis, ParsedAnalysis};
pub use insights::{ComparisonEntry, Insight, InsightKind};
pub use lists::{ActionItem, Priority};
pub use scores::{Metric, ScoreSet};
pub use sections::Section;
pub use skills::SkillEntry;
