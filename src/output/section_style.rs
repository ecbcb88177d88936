//! Icon and color per analysis section, keyed by title

use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Score,
    Skills,
    Experience,
    Education,
    Keywords,
    Strengths,
    Improvements,
    Interview,
    Market,
    ActionPlan,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    pub kind: SectionKind,
    pub icon: &'static str,
    pub color: Color,
    pub css_color: &'static str,
}

const fn style(kind: SectionKind, icon: &'static str, color: Color, css_color: &'static str) -> SectionStyle {
    SectionStyle {
        kind,
        icon,
        color,
        css_color,
    }
}

pub const DEFAULT_STYLE: SectionStyle = style(SectionKind::General, "📋", Color::Blue, "#3b82f6");

/// First row with a keyword contained in the lower-cased title wins
const STYLE_TABLE: [(&[&str], SectionStyle); 10] = [
    (&["score", "match"], style(SectionKind::Score, "📊", Color::Blue, "#3b82f6")),
    (&["skills"], style(SectionKind::Skills, "🎯", Color::Green, "#10b981")),
    (&["experience"], style(SectionKind::Experience, "💼", Color::Magenta, "#8b5cf6")),
    (&["education"], style(SectionKind::Education, "🎓", Color::BrightBlue, "#6366f1")),
    (&["keyword", "ats"], style(SectionKind::Keywords, "🔍", Color::Yellow, "#f59e0b")),
    (&["strength"], style(SectionKind::Strengths, "💪", Color::BrightGreen, "#059669")),
    (&["improvement", "area"], style(SectionKind::Improvements, "🚀", Color::BrightYellow, "#f97316")),
    (&["interview"], style(SectionKind::Interview, "💬", Color::Cyan, "#06b6d4")),
    (&["market", "competitive"], style(SectionKind::Market, "📈", Color::BrightMagenta, "#ec4899")),
    (&["plan", "action"], style(SectionKind::ActionPlan, "📅", Color::Red, "#ef4444")),
];

pub fn section_style(title: &str) -> SectionStyle {
    let title = title.to_lowercase();
    STYLE_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|&(_, style)| style)
        .unwrap_or(DEFAULT_STYLE)
}
