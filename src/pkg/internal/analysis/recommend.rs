use crate::pkg::internal::analysis::keywords::{KeywordMatch, SkillsMatch};
use crate::pkg::internal::analysis::profile::ResumeProfile;
use crate::pkg::internal::analysis::score::{Band, FormatChecks, ScoreBreakdown};

const TOP_MISSING_KEYWORDS: usize = 5;
const MIN_ACTION_VERBS: usize = 3;

/// Orders suggestions highest-impact first: keywords, skills, format,
/// education, then writing quality. Output is deterministic for identical
/// inputs and a strong overall score collapses to a single positive note.
pub fn recommend(
    breakdown: &ScoreBreakdown,
    keywords: &KeywordMatch,
    skills: &SkillsMatch,
    checks: &FormatChecks,
    profile: &ResumeProfile,
) -> Vec<String> {
    if breakdown.band == Band::Excellent {
        return vec!["Great job! Your resume is well-optimized for ATS systems.".to_string()];
    }

    let mut recommendations = Vec::new();
    if !keywords.missing.is_empty() {
        let top: Vec<&str> = keywords
            .missing
            .iter()
            .take(TOP_MISSING_KEYWORDS)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Include more relevant keywords from the job description: {}",
            top.join(", ")
        ));
    }
    if !skills.missing.is_empty() {
        recommendations.push(format!(
            "Add missing required skills: {}",
            skills.missing.join(", ")
        ));
    }
    if !checks.has_contact {
        recommendations.push("Add clear contact information (email, phone)".to_string());
    }
    if !checks.has_sections {
        recommendations.push(
            "Organize the resume into clear sections (Experience, Education, Skills)".to_string(),
        );
    }
    if !checks.reasonable_length {
        recommendations
            .push("Adjust resume length to 100-2000 words for optimal readability".to_string());
    }
    if !checks.special_chars_ok {
        recommendations.push(
            "Reduce special characters and decorative symbols that confuse ATS parsers"
                .to_string(),
        );
    }
    if breakdown.scores.education == 0.0 {
        recommendations.push(
            "Ensure the education section is clearly visible and matches the job requirements"
                .to_string(),
        );
    }
    // writing-quality hints only make sense once there is text to judge
    if profile.word_count > 0 {
        if profile.action_verbs_count < MIN_ACTION_VERBS {
            recommendations.push(
                "Start bullet points with strong action verbs (led, built, improved)".to_string(),
            );
        }
        if profile.quantifiable_achievements.is_empty() {
            recommendations.push(
                "Quantify achievements with numbers, percentages or dollar amounts".to_string(),
            );
        }
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::analysis::score::{aggregate, ComponentScores, ScoringProfile};
    use std::collections::BTreeSet;

    fn breakdown_with(keyword: f64, education: f64) -> ScoreBreakdown {
        aggregate(
            &ScoringProfile::balanced(),
            ComponentScores {
                format: 50.0,
                keyword,
                skills: 50.0,
                education,
                ..ComponentScores::default()
            },
        )
    }

    fn passing_checks() -> FormatChecks {
        FormatChecks {
            has_contact: true,
            has_sections: true,
            reasonable_length: true,
            special_chars_ok: true,
        }
    }

    #[test]
    fn test_excellent_score_gets_single_positive_message() {
        let breakdown = aggregate(
            &ScoringProfile::balanced(),
            ComponentScores {
                format: 100.0,
                keyword: 100.0,
                skills: 100.0,
                education: 100.0,
                ..ComponentScores::default()
            },
        );
        let out = recommend(
            &breakdown,
            &KeywordMatch::default(),
            &SkillsMatch::default(),
            &passing_checks(),
            &ResumeProfile::default(),
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Great job"));
    }

    #[test]
    fn test_missing_keywords_capped_at_five() {
        let missing: BTreeSet<String> = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let keywords = KeywordMatch {
            missing,
            ..KeywordMatch::default()
        };
        let out = recommend(
            &breakdown_with(10.0, 100.0),
            &keywords,
            &SkillsMatch::default(),
            &passing_checks(),
            &ResumeProfile::default(),
        );
        assert_eq!(out.len(), 1);
        // five names, sorted set order
        assert!(out[0].contains("alpha"));
        assert!(out[0].contains("epsilon"));
        assert!(!out[0].contains("zeta"));
    }

    #[test]
    fn test_failed_checks_emit_one_recommendation_each() {
        let checks = FormatChecks::default();
        let out = recommend(
            &breakdown_with(50.0, 0.0),
            &KeywordMatch::default(),
            &SkillsMatch::default(),
            &checks,
            &ResumeProfile::default(),
        );
        // four failed format checks plus the education gap
        assert_eq!(out.len(), 5);
        let unique: BTreeSet<&String> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn test_deterministic_ordering() {
        let skills = SkillsMatch {
            missing: vec!["Docker".to_string()],
            ..SkillsMatch::default()
        };
        let a = recommend(
            &breakdown_with(50.0, 100.0),
            &KeywordMatch::default(),
            &skills,
            &passing_checks(),
            &ResumeProfile::default(),
        );
        let b = recommend(
            &breakdown_with(50.0, 100.0),
            &KeywordMatch::default(),
            &skills,
            &passing_checks(),
            &ResumeProfile::default(),
        );
        assert_eq!(a, b);
        assert_eq!(a, vec!["Add missing required skills: Docker".to_string()]);
    }

    #[test]
    fn test_weak_writing_gets_wording_hints() {
        let weak = ResumeProfile {
            word_count: 250,
            action_verbs_count: 1,
            ..ResumeProfile::default()
        };
        let out = recommend(
            &breakdown_with(50.0, 100.0),
            &KeywordMatch::default(),
            &SkillsMatch::default(),
            &passing_checks(),
            &weak,
        );
        assert!(out.iter().any(|r| r.contains("action verbs")));
        assert!(out.iter().any(|r| r.contains("Quantify achievements")));

        let strong = ResumeProfile {
            word_count: 250,
            action_verbs_count: 8,
            quantifiable_achievements: vec!["increased sales by 20%".to_string()],
            ..ResumeProfile::default()
        };
        let out = recommend(
            &breakdown_with(50.0, 100.0),
            &KeywordMatch::default(),
            &SkillsMatch::default(),
            &passing_checks(),
            &strong,
        );
        assert!(out.is_empty());
    }
}
