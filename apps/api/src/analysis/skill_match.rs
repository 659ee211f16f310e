//! Skill comparison — delegates classification to the LLM and derives the
//! match percentage and learning roadmap from the result.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{
    NO_GAPS_ROADMAP, ROADMAP_PROMPT_TEMPLATE, SKILL_MATCH_PROMPT_TEMPLATE,
};
use crate::llm_client::{LlmClient, LlmError};

/// The LLM's skill classification. Every field is defaulted so a partially
/// well-formed answer still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBuckets {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub extra: Vec<String>,
}

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub match_percentage: f64,
    pub roadmap: String,
}

/// Share of JD requirements the résumé covers: matched / (matched + missing),
/// as a percentage. Zero when the JD yielded no requirements at all.
pub fn match_percentage(matched: usize, missing: usize) -> f64 {
    let total_required = matched + missing;
    if total_required == 0 {
        return 0.0;
    }
    matched as f64 / total_required as f64 * 100.0
}

/// Human-readable compatibility tier shown in the report.
pub fn compatibility_label(percentage: f64) -> &'static str {
    if percentage >= 70.0 {
        "High Compatibility."
    } else if percentage >= 50.0 {
        "Moderate Compatibility."
    } else {
        "Low Compatibility."
    }
}

/// Runs the two-step analysis: skill classification, then roadmap generation
/// for whatever is missing. An unparseable classification degrades to empty
/// buckets rather than failing the request; transport and API errors still
/// propagate.
pub async fn run_analysis(
    resume_text: &str,
    job_description: &str,
    llm: &LlmClient,
) -> Result<SkillReport, AppError> {
    let prompt = SKILL_MATCH_PROMPT_TEMPLATE
        .replace("{resume}", resume_text)
        .replace("{job_description}", job_description);

    let buckets = match llm.call_json::<SkillBuckets>(&prompt).await {
        Ok(buckets) => buckets,
        Err(e @ (LlmError::Parse(_) | LlmError::EmptyContent)) => {
            warn!("Skill classification was not valid JSON, degrading to empty buckets: {e}");
            SkillBuckets::default()
        }
        Err(e) => return Err(AppError::Llm(format!("Skill classification failed: {e}"))),
    };

    let match_percentage = match_percentage(buckets.matched.len(), buckets.missing.len());

    let roadmap = if buckets.missing.is_empty() {
        NO_GAPS_ROADMAP.to_string()
    } else {
        let roadmap_prompt =
            ROADMAP_PROMPT_TEMPLATE.replace("{missing_skills}", &buckets.missing.join(", "));
        llm.call(&roadmap_prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?
    };

    info!(
        "Analysis complete: {} matched, {} missing, {} extra ({:.1}%)",
        buckets.matched.len(),
        buckets.missing.len(),
        buckets.extra.len(),
        match_percentage
    );

    Ok(SkillReport {
        matched: buckets.matched,
        missing: buckets.missing,
        extra: buckets.extra,
        match_percentage,
        roadmap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_percentage_ratio() {
        assert!((match_percentage(3, 1) - 75.0).abs() < f64::EPSILON);
        assert!((match_percentage(1, 1) - 50.0).abs() < f64::EPSILON);
        assert!((match_percentage(0, 4) - 0.0).abs() < f64::EPSILON);
        assert!((match_percentage(5, 0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_match_percentage_no_requirements_is_zero() {
        assert_eq!(match_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_compatibility_label_thresholds() {
        assert_eq!(compatibility_label(70.0), "High Compatibility.");
        assert_eq!(compatibility_label(85.5), "High Compatibility.");
        assert_eq!(compatibility_label(69.9), "Moderate Compatibility.");
        assert_eq!(compatibility_label(50.0), "Moderate Compatibility.");
        assert_eq!(compatibility_label(49.9), "Low Compatibility.");
        assert_eq!(compatibility_label(0.0), "Low Compatibility.");
    }

    #[test]
    fn test_skill_buckets_defaults_missing_fields() {
        let buckets: SkillBuckets = serde_json::from_str(r#"{"matched": ["Rust"]}"#).unwrap();
        assert_eq!(buckets.matched, vec!["Rust"]);
        assert!(buckets.missing.is_empty());
        assert!(buckets.extra.is_empty());
    }

    #[test]
    fn test_skill_buckets_full_deserialization() {
        let json = r#"{
            "matched": ["Rust", "SQL"],
            "missing": ["Kubernetes"],
            "extra": ["Photoshop"]
        }"#;
        let buckets: SkillBuckets = serde_json::from_str(json).unwrap();
        assert_eq!(buckets.matched.len(), 2);
        assert_eq!(buckets.missing, vec!["Kubernetes"]);
        assert_eq!(buckets.extra, vec!["Photoshop"]);
    }
}
