use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pkg::internal::analysis::profile::ResumeProfile;
use crate::pkg::internal::vocab::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Format,
    Keyword,
    Skills,
    Education,
    Readability,
    Validation,
}

/// A named weight table. Weights always sum to 1.0; scoring policies are
/// data, not control flow.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub name: &'static str,
    pub weights: Vec<(Component, f64)>,
}

impl ScoringProfile {
    /// CLI default: format 20%, keywords 40%, skills 25%, education 15%.
    pub fn balanced() -> Self {
        ScoringProfile {
            name: "balanced",
            weights: vec![
                (Component::Format, 0.20),
                (Component::Keyword, 0.40),
                (Component::Skills, 0.25),
                (Component::Education, 0.15),
            ],
        }
    }

    /// Web-app flavor: readability and validation stand in for education.
    pub fn webapp() -> Self {
        ScoringProfile {
            name: "webapp",
            weights: vec![
                (Component::Format, 0.35),
                (Component::Keyword, 0.25),
                (Component::Skills, 0.15),
                (Component::Readability, 0.10),
                (Component::Validation, 0.15),
            ],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::balanced()),
            "webapp" => Some(Self::webapp()),
            _ => None,
        }
    }

    pub fn weighs(&self, component: Component) -> bool {
        self.weights.iter().any(|(c, _)| *c == component)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Band {
    /// Thresholds apply to the rounded display score: >= 80 excellent,
    /// 60..=79 good, below that needs improvement.
    pub fn from_overall(rounded: u32) -> Self {
        if rounded >= 80 {
            Band::Excellent
        } else if rounded >= 60 {
            Band::Good
        } else {
            Band::NeedsImprovement
        }
    }
}

/// Every sub-score is a total function on [0, 100]; the aggregator never
/// sees a hole.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentScores {
    pub format: f64,
    pub keyword: f64,
    pub skills: f64,
    pub education: f64,
    pub readability: f64,
    pub validation: f64,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Format => self.format,
            Component::Keyword => self.keyword,
            Component::Skills => self.skills,
            Component::Education => self.education,
            Component::Readability => self.readability,
            Component::Validation => self.validation,
        }
    }
}

#[derive(Debug)]
pub struct ScoreBreakdown {
    pub scores: ComponentScores,
    pub overall: f64,
    pub rounded: u32,
    pub band: Band,
}

pub fn aggregate(profile: &ScoringProfile, scores: ComponentScores) -> ScoreBreakdown {
    let overall: f64 = profile
        .weights
        .iter()
        .map(|(component, weight)| weight * scores.get(*component))
        .sum();
    let overall = overall.clamp(0.0, 100.0);
    let rounded = overall.round() as u32;
    ScoreBreakdown {
        scores,
        overall,
        rounded,
        band: Band::from_overall(rounded),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatChecks {
    pub has_contact: bool,
    pub has_sections: bool,
    pub reasonable_length: bool,
    pub special_chars_ok: bool,
}

/// Three boolean checks averaged to 100, minus 25 when the text is over a
/// tenth non-alphanumeric noise.
pub fn format_score(profile: &ResumeProfile, raw: &str) -> (f64, FormatChecks) {
    let checks = FormatChecks {
        has_contact: !profile.contact.is_empty(),
        has_sections: profile.sections.len() >= 2,
        reasonable_length: (100..=2000).contains(&profile.word_count),
        special_chars_ok: special_char_ratio(raw) <= 0.1,
    };
    let passed = [checks.has_contact, checks.has_sections, checks.reasonable_length]
        .iter()
        .filter(|c| **c)
        .count();
    let mut score = passed as f64 / 3.0 * 100.0;
    if !checks.special_chars_ok {
        score -= 25.0;
    }
    (score.clamp(0.0, 100.0), checks)
}

fn special_char_ratio(raw: &str) -> f64 {
    let total = raw.chars().count().max(1);
    let special = raw
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace() && *c != '_')
        .count();
    special as f64 / total as f64
}

/// Binary: 100 when any required level is present (or nothing required).
/// Requirements match either as substrings of the education entries or as
/// degree markers resolving to a found level.
pub fn education_score(profile: &ResumeProfile, required: &[String], vocab: &Vocabulary) -> f64 {
    if required.is_empty() {
        return 100.0;
    }
    let haystack = profile
        .education
        .iter()
        .flat_map(|e| {
            [
                Some(e.level.to_string()),
                e.field.clone(),
                e.institution.clone(),
            ]
        })
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let levels = profile.degree_levels();
    let satisfied = required.iter().any(|req| {
        let req_lower = req.to_lowercase();
        if haystack.contains(&req_lower) {
            return true;
        }
        vocab
            .degree_markers
            .iter()
            .any(|(level, marker)| marker.is_match(req) && levels.contains(level))
    });
    if satisfied {
        100.0
    } else {
        0.0
    }
}

lazy_static! {
    static ref PIPE_TABLE: Regex = Regex::new(r"\|\s*[^|\n]+\s*\|").expect("invalid table pattern");
}

/// Flesch-style approximation: 100 minus the average sentence length.
/// Too little text to judge sits at a neutral 50.
pub fn readability_score(raw: &str) -> f64 {
    let sentences = raw
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words = raw.split_whitespace().count();
    if words < 10 || sentences == 0 {
        return 50.0;
    }
    let avg_sentence_len = words as f64 / sentences as f64;
    (100.0 - avg_sentence_len).clamp(0.0, 100.0)
}

/// Best-practice checks, 25 points off per failure: word count outside
/// 300..=800, pipe tables, non-ASCII noise.
pub fn validation_score(raw: &str) -> f64 {
    let word_count = raw.split_whitespace().count();
    let mut issues = 0u32;
    if word_count > 800 {
        issues += 1;
    }
    if word_count < 300 {
        issues += 1;
    }
    if PIPE_TABLE.is_match(raw) {
        issues += 1;
    }
    if raw.chars().any(|c| !c.is_ascii()) {
        issues += 1;
    }
    (100.0 - 25.0 * issues as f64).max(0.0)
}
