pub mod keywords;
pub mod normalize;
pub mod profile;
pub mod recommend;
pub mod report;
pub mod score;

use crate::pkg::internal::read::{self, ResumeDocument};
use crate::pkg::internal::vocab::Vocabulary;
use keywords::{match_keywords, match_skills};
use normalize::normalize;
use profile::extract_profile;
use report::AnalysisReport;
use score::{
    aggregate, education_score, format_score, readability_score, validation_score,
    ComponentScores, ScoringProfile,
};

/// Caller-supplied comparison targets. Everything is optional; absent
/// requirements score as neutral.
#[derive(Debug, Clone, Default)]
pub struct JobRequirements {
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub required_education: Vec<String>,
}

impl JobRequirements {
    /// Splits a comma-separated list. Anything that does not split
    /// sensibly degrades to "no requirement given".
    pub fn split_list(raw: Option<&str>) -> Vec<String> {
        raw.map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
    }
}

/// One stateless pipeline run over already-extracted text.
pub fn analyze_text(
    text: &str,
    requirements: &JobRequirements,
    scoring: &ScoringProfile,
    vocab: &Vocabulary,
) -> AnalysisReport {
    let tokens = normalize(text, vocab);
    let resume_profile = extract_profile(text, &tokens, vocab);

    let job_tokens = requirements
        .description
        .as_deref()
        .map(|description| normalize(description, vocab).keyword_set());
    let keywords = match_keywords(&tokens.keyword_set(), job_tokens.as_ref());
    let skills = match_skills(text, &resume_profile.skills, &requirements.required_skills);

    let (format, checks) = format_score(&resume_profile, text);
    let scores = ComponentScores {
        format,
        keyword: keywords.score,
        skills: skills.score,
        education: education_score(&resume_profile, &requirements.required_education, vocab),
        readability: readability_score(text),
        validation: validation_score(text),
    };
    let breakdown = aggregate(scoring, scores);
    let recommendations =
        recommend::recommend(&breakdown, &keywords, &skills, &checks, &resume_profile);
    AnalysisReport::build(
        scoring,
        &breakdown,
        keywords,
        skills,
        resume_profile,
        recommendations,
    )
}

/// Full run from raw bytes. Extraction failure degrades to empty-text
/// analysis so the caller always gets a complete report.
pub fn analyze_document(
    document: &ResumeDocument,
    requirements: &JobRequirements,
    scoring: &ScoringProfile,
    vocab: &Vocabulary,
) -> AnalysisReport {
    let text = match read::extract_document(document) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("text extraction failed, scoring empty document: {}", err);
            String::new()
        }
    };
    analyze_text(&text, requirements, scoring, vocab)
}
