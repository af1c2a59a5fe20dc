use serde::{Deserialize, Serialize};

use crate::pkg::internal::analysis::keywords::{KeywordMatch, SkillsMatch};
use crate::pkg::internal::analysis::profile::{Contact, EducationEntry, ResumeProfile};
use crate::pkg::internal::analysis::score::{Band, Component, ScoreBreakdown, ScoringProfile};

/// The complete analysis result under its stable wire names. Exporting to
/// JSON and re-parsing reproduces the exact field values; the only
/// documented rounding is the integer `overall_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub band: Band,
    pub format_score: f64,
    pub keyword_score: f64,
    pub skills_score: f64,
    pub education_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_score: Option<f64>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub contact: Contact,
    pub education: Vec<EducationEntry>,
    pub word_count: usize,
    pub action_verbs_count: usize,
    pub quantifiable_achievements: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    pub fn build(
        scoring: &ScoringProfile,
        breakdown: &ScoreBreakdown,
        keywords: KeywordMatch,
        skills: SkillsMatch,
        profile: ResumeProfile,
        recommendations: Vec<String>,
    ) -> Self {
        AnalysisReport {
            overall_score: breakdown.rounded,
            band: breakdown.band,
            format_score: breakdown.scores.format,
            keyword_score: breakdown.scores.keyword,
            skills_score: breakdown.scores.skills,
            education_score: breakdown.scores.education,
            readability_score: scoring
                .weighs(Component::Readability)
                .then_some(breakdown.scores.readability),
            validation_score: scoring
                .weighs(Component::Validation)
                .then_some(breakdown.scores.validation),
            matched_keywords: keywords.matched.into_iter().collect(),
            missing_keywords: keywords.missing.into_iter().collect(),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            contact: profile.contact,
            education: profile.education,
            word_count: profile.word_count,
            action_verbs_count: profile.action_verbs_count,
            quantifiable_achievements: profile.quantifiable_achievements,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::vocab::DegreeLevel;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            overall_score: 67,
            band: Band::Good,
            format_score: 200.0 / 3.0,
            keyword_score: 66.7,
            skills_score: 33.3,
            education_score: 100.0,
            readability_score: None,
            validation_score: None,
            matched_keywords: vec!["aws".into(), "python".into()],
            missing_keywords: vec!["docker".into()],
            matched_skills: vec!["Python".into()],
            missing_skills: vec!["Docker".into(), "Kubernetes".into()],
            contact: Contact {
                email: Some("jane@example.com".into()),
                ..Contact::default()
            },
            education: vec![EducationEntry {
                level: DegreeLevel::Bachelor,
                field: Some("Computer Science".into()),
                institution: None,
            }],
            word_count: 412,
            action_verbs_count: 4,
            quantifiable_achievements: vec!["increased throughput by 30%".into()],
            recommendations: vec!["Add missing required skills: Docker, Kubernetes".into()],
        }
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let report = sample();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_stable_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        for field in [
            "overall_score",
            "band",
            "format_score",
            "keyword_score",
            "skills_score",
            "education_score",
            "matched_keywords",
            "missing_keywords",
            "matched_skills",
            "missing_skills",
            "contact",
            "education",
            "action_verbs_count",
            "quantifiable_achievements",
            "recommendations",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        // variant scores stay off the wire unless the profile weighs them
        assert!(value.get("readability_score").is_none());
        assert_eq!(value["band"], "good");
    }
}
