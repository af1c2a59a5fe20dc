use std::collections::BTreeSet;

use crate::pkg::internal::vocab::has_whole_term;

/// Set comparison between resume and job-description tokens. Frequency is
/// not scored; matched and missing partition the job tokens.
#[derive(Debug, Default)]
pub struct KeywordMatch {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub score: f64,
}

pub fn match_keywords(resume: &BTreeSet<String>, job: Option<&BTreeSet<String>>) -> KeywordMatch {
    let job = match job {
        Some(tokens) if !tokens.is_empty() => tokens,
        // nothing to compare against, neutral score
        _ => {
            return KeywordMatch {
                score: 100.0,
                ..KeywordMatch::default()
            }
        }
    };
    let matched: BTreeSet<String> = job.intersection(resume).cloned().collect();
    let missing: BTreeSet<String> = job.difference(resume).cloned().collect();
    let score = matched.len() as f64 / job.len() as f64 * 100.0;
    KeywordMatch {
        matched,
        missing,
        score,
    }
}

/// Required skills checked case-insensitively against the resume: either a
/// whole-term hit in the raw text or equality with a detected skill. The
/// required list is treated as a set: case-insensitive duplicates collapse
/// to the first occurrence, which keeps its casing in the output lists.
#[derive(Debug, Default)]
pub struct SkillsMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: f64,
}

pub fn match_skills(
    resume_text: &str,
    resume_skills: &BTreeSet<String>,
    required: &[String],
) -> SkillsMatch {
    if required.is_empty() {
        return SkillsMatch {
            score: 100.0,
            ..SkillsMatch::default()
        };
    }
    let known: BTreeSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let haystack = resume_text.to_lowercase();
    let mut seen = BTreeSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in required {
        let lowered = skill.to_lowercase();
        if !seen.insert(lowered.clone()) {
            continue;
        }
        let hit = known.contains(&lowered) || has_whole_term(&haystack, &lowered);
        if hit {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }
    let score = matched.len() as f64 / seen.len() as f64 * 100.0;
    SkillsMatch {
        matched,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing_partition_job_tokens() {
        let resume = set(&["python", "java", "aws"]);
        let job = set(&["python", "aws", "docker"]);
        let outcome = match_keywords(&resume, Some(&job));
        assert_eq!(outcome.matched, set(&["python", "aws"]));
        assert_eq!(outcome.missing, set(&["docker"]));
        let union: BTreeSet<String> = outcome.matched.union(&outcome.missing).cloned().collect();
        assert_eq!(union, job);
        assert!(outcome.matched.is_disjoint(&outcome.missing));
        assert!((outcome.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_job_description_is_neutral() {
        let resume = set(&["python"]);
        assert_eq!(match_keywords(&resume, None).score, 100.0);
        assert_eq!(match_keywords(&resume, Some(&set(&[]))).score, 100.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let outcome = match_keywords(&set(&["rust"]), Some(&set(&["cobol", "fortran"])));
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.missing.len(), 2);
        assert!(outcome.matched.is_empty());
    }

    #[test]
    fn test_skills_matched_case_insensitively() {
        let required = vec![
            "Python".to_string(),
            "Docker".to_string(),
            "Kubernetes".to_string(),
        ];
        let outcome = match_skills("python java aws", &set(&[]), &required);
        assert_eq!(outcome.matched, vec!["Python"]);
        assert_eq!(outcome.missing, vec!["Docker", "Kubernetes"]);
        assert!((outcome.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_required_skills_counted_once() {
        let required = vec![
            "Python".to_string(),
            "Python".to_string(),
            "Docker".to_string(),
        ];
        let outcome = match_skills("python everywhere", &set(&[]), &required);
        assert_eq!(outcome.matched, vec!["Python"]);
        assert_eq!(outcome.missing, vec!["Docker"]);
        assert_eq!(outcome.score, 50.0);
        // casing differences are duplicates too, first spelling wins
        let mixed = vec!["python".to_string(), "PYTHON".to_string()];
        let outcome = match_skills("python everywhere", &set(&[]), &mixed);
        assert_eq!(outcome.matched, vec!["python"]);
        assert_eq!(outcome.score, 100.0);
    }

    #[test]
    fn test_skills_score_invariant_under_reordering() {
        let a = vec!["Python".to_string(), "AWS".to_string(), "Git".to_string()];
        let b = vec!["Git".to_string(), "Python".to_string(), "AWS".to_string()];
        let text = "worked with python and git";
        let skills = set(&[]);
        assert_eq!(
            match_skills(text, &skills, &a).score,
            match_skills(text, &skills, &b).score
        );
    }

    #[test]
    fn test_no_required_skills_is_neutral() {
        let outcome = match_skills("anything", &set(&[]), &[]);
        assert_eq!(outcome.score, 100.0);
        assert!(outcome.matched.is_empty() && outcome.missing.is_empty());
    }
}
