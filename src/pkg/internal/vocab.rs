use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reference vocabularies compiled once at process start and shared
/// read-only across analyses.
pub struct Vocabulary {
    pub stop_words: HashSet<&'static str>,
    pub skills: Vec<Skill>,
    pub section_headers: &'static [&'static str],
    pub degree_markers: Vec<(DegreeLevel, Regex)>,
    pub action_verbs: &'static [&'static str],
    pub achievement_patterns: Vec<Regex>,
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
}

pub struct Skill {
    pub name: &'static str,
    pattern: Regex,
}

impl Skill {
    pub fn found_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DegreeLevel {
    Associate,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DegreeLevel::Associate => "Associate",
            DegreeLevel::Diploma => "Diploma",
            DegreeLevel::Bachelor => "Bachelor",
            DegreeLevel::Master => "Master",
            DegreeLevel::Doctorate => "Doctorate",
        };
        write!(f, "{}", name)
    }
}

/// Whole-term matcher tolerant of terms that end in non-word characters
/// ("C++", "Node.js"), where `\b` falls apart.
pub fn term_pattern(term: &str) -> Regex {
    let escaped = regex::escape(term);
    Regex::new(&format!(
        r"(?i)(?:^|[^a-z0-9+#.]){}(?:$|[^a-z0-9+#.])",
        escaped
    ))
    .expect("invalid term pattern")
}

/// Whole-term containment with the same boundary rule as `term_pattern`,
/// without compiling a regex. Both arguments must already be lowercased;
/// callers lowercase the haystack once and probe it with many terms.
pub fn has_whole_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    for (idx, _) in haystack.match_indices(term) {
        let before_ok = haystack[..idx]
            .chars()
            .next_back()
            .map(|c| !is_term_char(c))
            .unwrap_or(true);
        let after_ok = haystack[idx + term.len()..]
            .chars()
            .next()
            .map(|c| !is_term_char(c))
            .unwrap_or(true);
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.')
}

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours",
];

const TECHNICAL_SKILLS: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Go", "Rust", "Ruby", "PHP",
    "Swift", "SQL", "NoSQL", "MongoDB", "PostgreSQL", "MySQL", "Firebase", "React", "Angular",
    "Vue.js", "Node.js", "Next.js", "Redux", "React Native", "Django", "Flask", "Spring",
    "HTML", "CSS", "REST API", "GraphQL", "AWS", "Azure", "GCP", "Docker", "Kubernetes",
    "Terraform", "Git", "GitHub", "CI/CD", "Machine Learning", "Deep Learning", "NLP",
    "Computer Vision", "Data Analysis", "TensorFlow", "PyTorch", "scikit-learn", "Tableau",
    "Power BI", "Jest", "Cypress", "Webpack",
];

const SOFT_SKILLS: &[&str] = &[
    "Communication", "Leadership", "Teamwork", "Problem Solving", "Critical Thinking",
    "Time Management", "Adaptability", "Creativity", "Collaboration", "Project Management",
    "Agile", "Scrum",
];

const SECTION_HEADERS: &[&str] = &[
    "summary", "objective", "experience", "work history", "employment", "education", "skills",
    "projects", "certifications", "achievements", "awards", "languages", "interests",
    "references",
];

const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "led", "implemented", "created", "improved",
    "increased", "reduced", "optimized", "designed", "built", "established", "coordinated",
    "trained", "mentored", "supervised", "initiated", "spearheaded", "delivered",
];

const ACHIEVEMENT_PATTERNS: &[&str] = &[
    r"(?i)increased\s+[a-z\s]+by\s+\d+%",
    r"(?i)reduced\s+[a-z\s]+by\s+\d+%",
    r"(?i)improved\s+[a-z\s]+by\s+\d+%",
    r"(?i)achieved\s+\d+%",
    r"(?i)saved\s+\$\d+",
    r"(?i)generated\s+\$\d+",
    r"(?i)managed\s+\$\d+\s+budget",
    r"(?i)led\s+\d+\s+team",
    r"(?i)trained\s+\d+\s+people",
];

impl Vocabulary {
    fn load() -> Self {
        let skills = TECHNICAL_SKILLS
            .iter()
            .chain(SOFT_SKILLS.iter())
            .map(|name| Skill {
                name,
                pattern: term_pattern(name),
            })
            .collect();
        let degree_markers = vec![
            (
                DegreeLevel::Bachelor,
                Regex::new(r"(?i)\b(bachelor(?:'s|s)?|b\.s\.?|bsc|b\.sc\.?|b\.a\.?|b\.?tech|b\.e\.)\b")
                    .expect("invalid degree pattern"),
            ),
            (
                DegreeLevel::Master,
                Regex::new(r"(?i)\b(master(?:'s|s)?|m\.s\.?|msc|m\.sc\.?|m\.a\.?|m\.?tech|mba|m\.b\.a\.?)\b")
                    .expect("invalid degree pattern"),
            ),
            (
                DegreeLevel::Doctorate,
                Regex::new(r"(?i)\b(ph\.?d\.?|doctorate|doctoral)\b").expect("invalid degree pattern"),
            ),
            (
                DegreeLevel::Diploma,
                Regex::new(r"(?i)\bdiploma\b").expect("invalid degree pattern"),
            ),
            (
                DegreeLevel::Associate,
                Regex::new(r"(?i)\bassociate(?:'s)?\s+degree\b").expect("invalid degree pattern"),
            ),
        ];
        let achievement_patterns = ACHIEVEMENT_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("invalid achievement pattern"))
            .collect();
        Vocabulary {
            stop_words: STOP_WORDS.iter().copied().collect(),
            skills,
            section_headers: SECTION_HEADERS,
            degree_markers,
            action_verbs: ACTION_VERBS,
            achievement_patterns,
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("invalid email pattern"),
            phone: Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
                .expect("invalid phone pattern"),
            linkedin: Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+")
                .expect("invalid linkedin pattern"),
            github: Regex::new(r"(?i)github\.com/[A-Za-z0-9_-]+").expect("invalid github pattern"),
        }
    }
}

lazy_static! {
    pub static ref VOCAB: Vocabulary = Vocabulary::load();
}
