use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pkg::internal::analysis::normalize::TokenStream;
use crate::pkg::internal::vocab::{DegreeLevel, Vocabulary};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub level: DegreeLevel,
    pub field: Option<String>,
    pub institution: Option<String>,
}

/// Structured attributes derived from one resume. Read-only once built.
#[derive(Debug, Default, Serialize)]
pub struct ResumeProfile {
    pub contact: Contact,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationEntry>,
    pub sections: BTreeSet<String>,
    pub word_count: usize,
    pub action_verbs_count: usize,
    pub quantifiable_achievements: Vec<String>,
}

impl ResumeProfile {
    pub fn degree_levels(&self) -> BTreeSet<DegreeLevel> {
        self.education.iter().map(|e| e.level).collect()
    }
}

lazy_static! {
    static ref FIELD_OF_STUDY: Regex =
        Regex::new(r"(?:\bin|\bof)\s+([A-Z][A-Za-z&/ ]+)").expect("invalid field pattern");
    static ref INSTITUTION: Regex = Regex::new(
        r"([A-Z][A-Za-z&.'-]+(?: [A-Z][A-Za-z&.'-]+)* (?:University|College|Institute|School)|(?:University|College|Institute|School) of [A-Z][A-Za-z ]+)"
    )
    .expect("invalid institution pattern");
}

/// Scans raw (original-cased) text plus the normalized token stream.
/// Extraction never fails; empty text degrades to the empty profile.
pub fn extract_profile(raw: &str, tokens: &TokenStream, vocab: &Vocabulary) -> ResumeProfile {
    let lowered = raw.to_lowercase();
    ResumeProfile {
        contact: extract_contact(raw, vocab),
        skills: extract_skills(raw, vocab),
        education: extract_education(raw, vocab),
        sections: extract_sections(raw, vocab),
        word_count: tokens.word_count(),
        action_verbs_count: count_action_verbs(&lowered, vocab),
        quantifiable_achievements: find_achievements(raw, vocab),
    }
}

/// First occurrence wins for every contact field.
fn extract_contact(raw: &str, vocab: &Vocabulary) -> Contact {
    Contact {
        email: vocab.email.find(raw).map(|m| m.as_str().to_string()),
        phone: vocab.phone.find(raw).map(|m| m.as_str().trim().to_string()),
        linkedin: vocab.linkedin.find(raw).map(|m| m.as_str().to_string()),
        github: vocab.github.find(raw).map(|m| m.as_str().to_string()),
    }
}

fn extract_skills(raw: &str, vocab: &Vocabulary) -> BTreeSet<String> {
    vocab
        .skills
        .iter()
        .filter(|skill| skill.found_in(raw))
        .map(|skill| skill.name.to_string())
        .collect()
}

/// One entry per degree marker per line; field and institution are pulled
/// best-effort from the same line. All found levels are recorded.
fn extract_education(raw: &str, vocab: &Vocabulary) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    for line in raw.lines() {
        for (level, marker) in &vocab.degree_markers {
            if marker.is_match(line) {
                entries.push(EducationEntry {
                    level: *level,
                    field: FIELD_OF_STUDY
                        .captures(line)
                        .map(|c| c[1].trim().to_string()),
                    institution: INSTITUTION.captures(line).map(|c| c[1].trim().to_string()),
                });
            }
        }
    }
    entries
}

fn extract_sections(raw: &str, vocab: &Vocabulary) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for line in raw.lines() {
        let lowered = line.trim().to_lowercase();
        for header in vocab.section_headers {
            // headers are ASCII, so the prefix split is char-safe
            if let Some(rest) = lowered.strip_prefix(header) {
                let boundary = rest
                    .chars()
                    .next()
                    .map(|c| !c.is_alphanumeric())
                    .unwrap_or(true);
                if boundary {
                    found.insert(header.to_string());
                }
            }
        }
    }
    found
}

fn count_action_verbs(lowered: &str, vocab: &Vocabulary) -> usize {
    vocab
        .action_verbs
        .iter()
        .map(|verb| lowered.matches(verb).count())
        .sum()
}

/// Quantified claims ("increased revenue by 40%", "saved $2M"), capped at
/// two per pattern and five overall.
fn find_achievements(raw: &str, vocab: &Vocabulary) -> Vec<String> {
    let mut found = Vec::new();
    for pattern in &vocab.achievement_patterns {
        for m in pattern.find_iter(raw).take(2) {
            found.push(m.as_str().to_string());
        }
    }
    found.truncate(5);
    found
}
