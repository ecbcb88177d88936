//! Single prompt for comprehensive resume analysis

use log::debug;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(job|resume)\}").expect("placeholder pattern is a valid regex")
});

/// Prompt template with `{job}` and `{resume}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

impl PromptTemplates {
    /// Substitute both placeholders in one pass, so placeholder text inside
    /// the inputs is left alone.
    pub fn render_analysis(&self, params: &PromptParams) -> String {
        debug!(
            "Rendering analysis prompt: resume {} chars, job {} chars",
            params.resume_content.chars().count(),
            params.job_content.chars().count()
        );

        let prompt = PLACEHOLDER_PATTERN
            .replace_all(&self.analysis, |captures: &Captures| match &captures[1] {
                "job" => params.job_content.clone(),
                _ => params.resume_content.clone(),
            })
            .into_owned();

        debug!("Final prompt length: {} chars", prompt.chars().count());
        prompt
    }
}

const ANALYSIS_TEMPLATE: &str = r#"As an expert resume reviewer and career coach, analyze the following resume against the provided job description and provide detailed feedback with comprehensive statistics.

**Job Description:**
{job}

**Resume Content:**
{resume}

Please provide a comprehensive analysis in the following format:

## Overall Match Score
**Score:** X/100%
**Rationale:** Explain the scoring breakdown based on skills match, experience relevance, and keyword alignment.
**Industry Alignment:** Rate how well the resume fits the target industry/role.

## Skills Analysis
**Technical Skills Found:** X out of Y required skills identified
**Relevant Skills:** List all matching technical skills with proficiency indicators
**Missing Critical Skills:** List essential skills not found in resume
**Skill Gap Score:** X/100% (percentage of required skills present)
**Recommendations:** Specific skills to add or emphasize

## Experience Analysis
**Years of Relevant Experience:** X years
**Role Match:** How well previous roles align with target position
**Industry Experience:** Relevant industry background assessment
**Achievement Quantification:** Rate how well accomplishments are quantified (X/10)
**Leadership Experience:** Assessment of management/leadership roles
**Career Progression:** Analysis of growth trajectory

## Education & Certifications
**Education Relevance:** How well education matches job requirements
**Required Certifications:** X out of Y certifications present
**Additional Learning:** Relevant courses, training, or self-learning mentioned
**Education Score:** X/100%

## Keywords & ATS Optimization
**Keyword Match Rate:** X% of job description keywords found in resume
**Critical Keywords Present:** List of important matching keywords
**Missing High-Impact Keywords:** Priority keywords to add
**ATS Compatibility Score:** X/100%
**Formatting Issues:** Specific ATS-unfriendly elements identified

## Resume Structure Analysis
**Section Organization:** Rate the logical flow and structure (X/10)
**Length Appropriateness:** Assessment of resume length for experience level
**Visual Hierarchy:** Clarity of headings and information presentation
**Contact Information:** Completeness and professionalism assessment
**Professional Summary:** Effectiveness rating (X/10)

## Key Strengths
- **Strength 1:** Detailed explanation with specific examples
- **Strength 2:** How this aligns with job requirements
- **Strength 3:** Impact on hiring decision
- **Strength 4:** Competitive advantage this provides
- **Strength 5:** Market value of this strength

## Areas for Improvement
- **Priority 1:** Most critical improvement needed with specific action steps
- **Priority 2:** Secondary improvement with implementation timeline
- **Priority 3:** Enhancement opportunity with expected impact
- **Priority 4:** Fine-tuning suggestion for better presentation
- **Priority 5:** Long-term development recommendation

## Recommended Action Plan
**Immediate Changes (1-2 days):**
- Specific formatting or keyword additions
- Quick content modifications

**Short-term Improvements (1-2 weeks):**
- Content restructuring recommendations
- Skill emphasis adjustments

**Long-term Development (1-3 months):**
- Skill acquisition suggestions
- Experience building recommendations

## Interview Readiness Assessment
**Story Preparation:** Rate readiness to discuss key achievements (X/10)
**Technical Depth:** Ability to discuss technical skills in detail
**Behavioral Examples:** Strength of STAR method examples available
**Questions Preparation:** Likely interview questions based on resume gaps

## Market Competitiveness
**Salary Range Alignment:** How resume supports target salary expectations
**Competition Analysis:** How this resume compares to typical candidates
**Unique Value Proposition:** What sets this candidate apart
**Hiring Probability:** Estimated likelihood of getting interview (X/100%)

Please be specific, provide quantitative assessments where possible, and include actionable advice with clear timelines for implementation."#;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(resume: &str, job: &str) -> PromptParams {
        PromptParams {
            resume_content: resume.to_string(),
            job_content: job.to_string(),
        }
    }

    #[test]
    fn test_analysis_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_analysis(&params(
            "Software Engineer with Python experience at Tech Corp.",
            "Senior Software Engineer role requiring React and Python.",
        ));

        assert!(prompt.contains("Software Engineer with Python experience at Tech Corp"));
        assert!(prompt.contains("Senior Software Engineer role requiring React and Python"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job}"));

        let job_at = prompt.find("**Job Description:**").unwrap();
        let resume_at = prompt.find("**Resume Content:**").unwrap();
        assert!(job_at < resume_at);
    }

    #[test]
    fn test_template_requests_every_parsed_section() {
        let template = PromptTemplates::default().analysis;
        for heading in [
            "## Overall Match Score",
            "## Skills Analysis",
            "## Experience Analysis",
            "## Education & Certifications",
            "## Keywords & ATS Optimization",
            "## Resume Structure Analysis",
            "## Key Strengths",
            "## Areas for Improvement",
            "## Recommended Action Plan",
            "## Interview Readiness Assessment",
            "## Market Competitiveness",
        ] {
            assert!(template.contains(heading), "missing {}", heading);
        }
    }

    #[test]
    fn test_placeholder_text_in_inputs_is_not_reexpanded() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_analysis(&params("Resume body", "Job mentions {resume}"));
        assert!(prompt.contains("Job mentions {resume}"));
        assert!(prompt.contains("**Resume Content:**\nResume body"));
    }
}
