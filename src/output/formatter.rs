//! Output formatters - console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::content::{classify_content, ContentLine};
use crate::output::report::{DashboardReport, ScoreTier};
use crate::output::section_style::section_style;
use crate::processing::insights::InsightKind;
use crate::processing::lists::Priority;
use crate::processing::scores::Metric;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 20;

/// Trait for formatting dashboard reports
pub trait OutputFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
    detailed: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

fn priority_heading(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "Immediate Changes",
        Priority::Medium => "Short-term Improvements",
        Priority::Low => "Long-term Development",
    }
}

fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Positive => "✅",
        InsightKind::Warning => "⚠️",
        InsightKind::Critical => "🚨",
    }
}

fn text_bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn source_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u8) -> Color {
        match ScoreTier::from_score(score) {
            ScoreTier::Excellent => Color::Green,
            ScoreTier::Good => Color::Yellow,
            ScoreTier::NeedsImprovement => Color::Red,
        }
    }

    fn format_score_badge(&self, tier: ScoreTier) -> String {
        let badge = tier.label().to_uppercase();
        let color = match tier {
            ScoreTier::Excellent => Color::Green,
            ScoreTier::Good => Color::Yellow,
            ScoreTier::NeedsImprovement => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_score_row(&self, label: &str, score: u8) -> String {
        format!(
            "  {:<24} {} {:>3}%\n",
            label,
            self.colorize(&text_bar(score), Self::score_color(score)),
            score
        )
    }

    fn format_section_content(&self, content: &str) -> String {
        let mut output = String::new();
        for line in classify_content(content) {
            let rendered = match line {
                ContentLine::Bullet(text) => format!("  • {}\n", text),
                ContentLine::SkillRating { name, proficiency, score } => format!(
                    "  {} {} {}\n",
                    self.bold(&format!("{}:", name)),
                    proficiency,
                    self.colorize(&format!("({}%)", score), Self::score_color(score))
                ),
                ContentLine::Heading(text) => format!("\n  {}\n", self.bold(&text)),
                ContentLine::Score { text, percentage } => match percentage {
                    Some(percentage) => format!(
                        "  {} {}\n",
                        text.replace("**", ""),
                        self.colorize(&format!("[{}%]", percentage), Self::score_color(percentage))
                    ),
                    None => format!("  {}\n", text.replace("**", "")),
                },
                ContentLine::Paragraph(text) => format!("  {}\n", text),
            };
            output.push_str(&rendered);
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        let analysis = &report.analysis;
        let scores = report.scores();
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS DASHBOARD", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        match &report.metadata.model_used {
            Some(model) => output.push_str(&format!("Model: {}\n", model)),
            None if report.metadata.used_fallback => output.push_str(&format!(
                "{}\n",
                self.colorize("Model: none (built-in fallback analysis)", Color::Yellow)
            )),
            None => {}
        }

        output.push_str(&self.format_header("Overall Match", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            scores.overall,
            self.format_score_badge(report.tier)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for metric in Metric::ALL {
            output.push_str(&self.format_score_row(&metric.to_string(), scores.get(metric)));
        }

        if !analysis.insights.is_empty() {
            output.push_str(&self.format_header("💡 Insights", 3));
            for insight in &analysis.insights {
                let color = match insight.kind {
                    InsightKind::Positive => Color::Green,
                    InsightKind::Warning => Color::Yellow,
                    InsightKind::Critical => Color::Red,
                };
                output.push_str(&format!(
                    "  {} {}\n",
                    insight_icon(insight.kind),
                    self.colorize(&insight.message, color)
                ));
            }
        }

        output.push_str(&self.format_header("🎯 Skills", 3));
        for entry in &analysis.skills {
            output.push_str(&self.format_score_row(&entry.skill, entry.score));
        }

        if self.detailed {
            output.push_str(&self.format_header("📏 Benchmarks", 3));
            for comparison in &analysis.comparisons {
                output.push_str(&format!(
                    "  {:<24} {:>3}% / target {:>3}%  (gap {})\n",
                    comparison.category,
                    comparison.current,
                    comparison.target,
                    comparison.gap()
                ));
            }
        }

        output.push_str(&self.format_header("✅ Key Strengths", 3));
        for strength in &analysis.strengths {
            output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
        }

        output.push_str(&self.format_header("🚀 Areas for Improvement", 3));
        for area in &analysis.improvements {
            output.push_str(&format!("  • {}\n", self.colorize(area, Color::Yellow)));
        }

        output.push_str(&self.format_header("📅 Action Plan", 2));
        if report.action_plan.is_empty() {
            output.push_str("  No specific actions identified.\n");
        }
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let mut items = report.action_items_with(priority).peekable();
            if items.peek().is_none() {
                continue;
            }
            output.push_str(&format!(
                "  {} ({})\n",
                self.bold(priority_heading(priority)),
                priority.timeline()
            ));
            for item in items {
                output.push_str(&format!("    - {}\n", item.item));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📖 Full Analysis", 2));
            for section in &analysis.sections {
                let style = section_style(&section.title);
                output.push_str(&format!(
                    "\n{} {}\n",
                    style.icon,
                    self.colorize(&section.title, style.color)
                ));
                output.push_str(&self.format_section_content(&section.content));
            }
        }

        if let Some(reason) = &report.metadata.fallback_reason {
            output.push_str(&format!(
                "\n{} {}\n",
                self.colorize("⚠️  Fallback analysis used:", Color::Yellow),
                reason
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn markdown_score_badge(tier: ScoreTier) -> &'static str {
        match tier {
            ScoreTier::Excellent => "🟢 Excellent Match",
            ScoreTier::Good => "🟡 Good Foundation",
            ScoreTier::NeedsImprovement => "🔴 Needs Improvement",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# 📊 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}` | **Model:** {}\n\n",
                source_name(&report.metadata.resume_source),
                source_name(&report.metadata.job_source),
                report.metadata.model_used.as_deref().unwrap_or("fallback analysis")
            ));
        }

        output.push_str(&format!(
            "**Overall:** {}% {}\n\n",
            analysis.scores.overall,
            Self::markdown_score_badge(report.tier)
        ));

        output.push_str("## Scores\n\n");
        output.push_str(&analysis.scores.to_labeled_text().replace('\n', "\n\n"));
        output.push_str("\n\n");

        output.push_str("## Benchmarks\n\n");
        output.push_str("| Category | Current | Target | Gap |\n");
        output.push_str("|----------|---------|--------|-----|\n");
        for comparison in &analysis.comparisons {
            output.push_str(&format!(
                "| {} | {}% | {}% | {} |\n",
                comparison.category,
                comparison.current,
                comparison.target,
                comparison.gap()
            ));
        }
        output.push('\n');

        output.push_str("## Skills\n\n");
        output.push_str("| Skill | Score |\n");
        output.push_str("|-------|-------|\n");
        for entry in &analysis.skills {
            output.push_str(&format!("| {} | {}% |\n", entry.skill, entry.score));
        }
        output.push('\n');

        if !analysis.insights.is_empty() {
            output.push_str("## Insights\n\n");
            for insight in &analysis.insights {
                output.push_str(&format!("- {} {}\n", insight_icon(insight.kind), insight.message));
            }
            output.push('\n');
        }

        output.push_str("## Key Strengths\n\n");
        for strength in &analysis.strengths {
            output.push_str(&format!("- {}\n", strength));
        }
        output.push('\n');

        output.push_str("## Areas for Improvement\n\n");
        for area in &analysis.improvements {
            output.push_str(&format!("- {}\n", area));
        }
        output.push('\n');

        output.push_str("## Action Plan\n\n");
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let items: Vec<_> = report.action_items_with(priority).collect();
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "### {} ({})\n\n",
                priority_heading(priority),
                priority.timeline()
            ));
            for item in items {
                output.push_str(&format!("- [ ] {}\n", item.item));
            }
            output.push('\n');
        }

        if self.detailed {
            output.push_str("## Full Analysis\n\n");
            for section in &analysis.sections {
                let style = section_style(&section.title);
                output.push_str(&format!("### {} {}\n\n{}\n\n", style.icon, section.title, section.content));
            }
        }

        if let Some(reason) = &report.metadata.fallback_reason {
            output.push_str(&format!("> ⚠️ Fallback analysis used: {}\n", reason));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #3b82f6; padding-bottom: 20px; }
        .tier { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .tier-excellent { background: #28a745; }
        .tier-good { background: #ffc107; color: #000; }
        .tier-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 { color: #3b82f6; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .score-row { display: flex; align-items: center; margin: 6px 0; }
        .score-label { width: 220px; }
        .bar { flex: 1; height: 10px; background: #e9ecef; border-radius: 5px; margin: 0 10px; }
        .bar-fill { height: 10px; border-radius: 5px; background: #3b82f6; }
        .insight { padding: 10px 15px; margin: 8px 0; border-radius: 6px; }
        .insight-positive { background: #d4edda; }
        .insight-warning { background: #fff3cd; }
        .insight-critical { background: #f8d7da; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border-bottom: 1px solid #e9ecef; padding: 6px 10px; text-align: left; }
        .analysis-section { border-left: 4px solid; padding: 5px 15px; margin: 15px 0; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 Resume Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Overall Match</h2>
            <h3>Overall Score: {{ overall_score }}% <span class="tier {{ tier_class }}">{{ tier_label }}</span></h3>
            {{ scores_html | safe }}
        </div>

        {% if has_insights %}
        <div class="section">
            <h2>💡 Insights</h2>
            {{ insights_html | safe }}
        </div>
        {% endif %}

        <div class="section">
            <h2>🎯 Skills</h2>
            {{ skills_html | safe }}
        </div>

        <div class="section">
            <h2>📏 Benchmarks</h2>
            {{ comparisons_html | safe }}
        </div>

        <div class="section">
            <h2>✅ Key Strengths</h2>
            {{ strengths_html | safe }}
        </div>

        <div class="section">
            <h2>🚀 Areas for Improvement</h2>
            {{ improvements_html | safe }}
        </div>

        <div class="section">
            <h2>📅 Action Plan</h2>
            {{ action_plan_html | safe }}
        </div>

        {% if detailed %}
        <div class="section">
            <h2>📖 Full Analysis</h2>
            {{ sections_html | safe }}
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by resume-analyzer v{{ version }}</strong></p>
            <p><strong>Model:</strong> {{ model }}</p>
            <p><strong>Resume:</strong> {{ resume_source }} | <strong>Job:</strong> {{ job_source }}</p>
            {% if has_fallback_reason %}
            <p><strong>Fallback reason:</strong> {{ fallback_reason }}</p>
            {% endif %}
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    detailed: bool,
    generated_at: String,
    processing_time: u64,
    overall_score: u8,
    tier_class: String,
    tier_label: String,
    scores_html: String,
    insights_html: String,
    has_insights: bool,
    skills_html: String,
    comparisons_html: String,
    strengths_html: String,
    improvements_html: String,
    action_plan_html: String,
    sections_html: String,
    version: String,
    model: String,
    resume_source: String,
    job_source: String,
    fallback_reason: String,
    has_fallback_reason: bool,
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{}</ul>", items)
}

fn html_score_row(label: &str, score: u8) -> String {
    format!(
        r#"<div class="score-row"><span class="score-label">{}</span><div class="bar"><div class="bar-fill" style="width: {}%"></div></div><strong>{}%</strong></div>"#,
        escape_html(label),
        score,
        score
    )
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, detailed: bool) -> Self {
        Self {
            include_styles,
            detailed,
        }
    }

    fn section_html(content: &str) -> String {
        classify_content(content)
            .into_iter()
            .map(|line| match line {
                ContentLine::Bullet(text) => format!("<p>• {}</p>", escape_html(&text)),
                ContentLine::SkillRating { name, proficiency, score } => html_score_row(
                    &format!("{}: {}", name, proficiency),
                    score,
                ),
                ContentLine::Heading(text) => format!("<h4>{}</h4>", escape_html(&text)),
                ContentLine::Score { text, percentage } => match percentage {
                    Some(percentage) => html_score_row(&text.replace("**", ""), percentage),
                    None => format!("<p><strong>{}</strong></p>", escape_html(&text.replace("**", ""))),
                },
                ContentLine::Paragraph(text) => format!("<p>{}</p>", escape_html(&text)),
            })
            .collect()
    }

    fn create_template_data(&self, report: &DashboardReport) -> HtmlTemplate {
        let analysis = &report.analysis;
        let scores = report.scores();

        let scores_html = Metric::ALL
            .iter()
            .map(|&metric| html_score_row(&metric.to_string(), scores.get(metric)))
            .collect();

        let insights_html = analysis
            .insights
            .iter()
            .map(|insight| {
                let class = match insight.kind {
                    InsightKind::Positive => "insight-positive",
                    InsightKind::Warning => "insight-warning",
                    InsightKind::Critical => "insight-critical",
                };
                format!(
                    r#"<div class="insight {}">{} {}</div>"#,
                    class,
                    insight_icon(insight.kind),
                    escape_html(&insight.message)
                )
            })
            .collect();

        let skills_html = analysis
            .skills
            .iter()
            .map(|entry| html_score_row(&entry.skill, entry.score))
            .collect();

        let comparison_rows: String = analysis
            .comparisons
            .iter()
            .map(|c| {
                format!(
                    "<tr><td>{}</td><td>{}%</td><td>{}%</td><td>{}</td></tr>",
                    escape_html(&c.category),
                    c.current,
                    c.target,
                    c.gap()
                )
            })
            .collect();
        let comparisons_html = format!(
            "<table><tr><th>Category</th><th>Current</th><th>Target</th><th>Gap</th></tr>{}</table>",
            comparison_rows
        );

        let mut action_plan_html = String::new();
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let items: Vec<String> = report
                .action_items_with(priority)
                .map(|item| item.item.clone())
                .collect();
            if items.is_empty() {
                continue;
            }
            action_plan_html.push_str(&format!(
                "<h4>{} ({})</h4>{}",
                priority_heading(priority),
                priority.timeline(),
                html_list(&items)
            ));
        }
        if action_plan_html.is_empty() {
            action_plan_html.push_str("<p>No specific actions identified.</p>");
        }

        let sections_html = analysis
            .sections
            .iter()
            .map(|section| {
                let style = section_style(&section.title);
                format!(
                    r#"<div class="analysis-section" style="border-color: {}"><h3>{} {}</h3>{}</div>"#,
                    style.css_color,
                    style.icon,
                    escape_html(&section.title),
                    Self::section_html(&section.content)
                )
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            detailed: self.detailed,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            overall_score: scores.overall,
            tier_class: report.tier.css_class().to_string(),
            tier_label: report.tier.label().to_string(),
            scores_html,
            has_insights: !analysis.insights.is_empty(),
            insights_html,
            skills_html,
            comparisons_html,
            strengths_html: html_list(&analysis.strengths),
            improvements_html: html_list(&analysis.improvements),
            action_plan_html,
            sections_html,
            version: report.metadata.analyzer_version.clone(),
            model: report
                .metadata
                .model_used
                .clone()
                .unwrap_or_else(|| "fallback analysis".to_string()),
            resume_source: source_name(&report.metadata.resume_source),
            job_source: source_name(&report.metadata.job_source),
            has_fallback_reason: report.metadata.fallback_reason.is_some(),
            fallback_reason: report.metadata.fallback_reason.clone().unwrap_or_default(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        let template = self.create_template_data(report);
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
            html_formatter: HtmlFormatter::new(include_html_styles, detailed),
        }
    }

    pub fn generate_report(&self, report: &DashboardReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), *format);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, format.extension())
}

/// Target file for `--save`: a directory gets a timestamped name derived
/// from the resume source, anything else is used as given.
pub fn report_path(save: &Path, format: &OutputFormat, resume_source: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_source, true))
    } else {
        save.to_path_buf()
    }
}
