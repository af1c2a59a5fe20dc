use std::path::{Path, PathBuf};

use clap::Args;

use crate::conf::settings;
use crate::pkg::internal::analysis::report::AnalysisReport;
use crate::pkg::internal::analysis::score::{Band, ScoringProfile};
use crate::pkg::internal::analysis::{self, JobRequirements};
use crate::pkg::internal::read::{self, DocumentFormat, ResumeDocument};
use crate::pkg::internal::vocab::VOCAB;
use crate::prelude::{AppError, Result};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the resume (pdf, docx or txt)
    pub resume: PathBuf,
    /// Job description: a file path or the literal text
    #[arg(long, short = 'j')]
    pub job_description: Option<String>,
    /// Comma-separated required skills
    #[arg(long, short = 's')]
    pub skills: Option<String>,
    /// Comma-separated required education levels
    #[arg(long, short = 'e')]
    pub education: Option<String>,
    /// Scoring profile (balanced | webapp)
    #[arg(long, short = 'p')]
    pub profile: Option<String>,
    /// Write the JSON report here as well
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Echo the extracted resume text
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub async fn run(args: AnalyzeArgs) -> Result<()> {
    let extension = args
        .resume
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let format = DocumentFormat::from_extension(extension)?;
    let data = tokio::fs::read(&args.resume).await?;
    let document = ResumeDocument { data, format };

    let text = match read::extract_document(&document) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("text extraction failed, scoring empty document: {}", err);
            String::new()
        }
    };

    let requirements = JobRequirements {
        description: resolve_job_description(args.job_description.as_deref()).await?,
        required_skills: JobRequirements::split_list(args.skills.as_deref()),
        required_education: JobRequirements::split_list(args.education.as_deref()),
    };
    let profile_name = args
        .profile
        .unwrap_or_else(|| settings.scoring_profile.clone());
    let scoring = ScoringProfile::from_name(&profile_name)
        .ok_or_else(|| AppError::BadRequest(format!("unknown scoring profile '{}'", profile_name)))?;

    let report = analysis::analyze_text(&text, &requirements, &scoring, &VOCAB);
    print_report(&args.resume, &scoring, &report);

    if args.verbose {
        banner("Extracted Text");
        let preview: String = text.chars().take(500).collect();
        println!("{}{}", preview, if text.len() > 500 { "..." } else { "" });
    }

    if let Some(path) = &args.output {
        tokio::fs::write(path, serde_json::to_string_pretty(&report)?).await?;
        println!("\nReport saved to {}", path.display());
    }

    if report.overall_score < 60 {
        std::process::exit(1);
    }
    Ok(())
}

/// A job description argument may be a readable file or the text itself.
async fn resolve_job_description(raw: Option<&str>) -> Result<Option<String>> {
    match raw {
        None => Ok(None),
        Some(value) if Path::new(value).is_file() => {
            let content = tokio::fs::read_to_string(value).await?;
            Ok(Some(content))
        }
        Some(value) => Ok(Some(value.to_string())),
    }
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!(" {}", title);
    println!("{}", "=".repeat(60));
}

fn print_report(resume: &Path, scoring: &ScoringProfile, report: &AnalysisReport) {
    banner("ATS Score Report");
    println!("File: {}", resume.display());
    println!("Profile: {}", scoring.name);

    let band = match report.band {
        Band::Excellent => "Excellent",
        Band::Good => "Good",
        Band::NeedsImprovement => "Needs Improvement",
    };
    println!("\nOverall ATS Score: {}% ({})", report.overall_score, band);

    println!("\nScore Breakdown:");
    println!("  format:     {:>5.1}%", report.format_score);
    println!("  keywords:   {:>5.1}%", report.keyword_score);
    println!("  skills:     {:>5.1}%", report.skills_score);
    println!("  education:  {:>5.1}%", report.education_score);
    if let Some(score) = report.readability_score {
        println!("  readability: {:>4.1}%", score);
    }
    if let Some(score) = report.validation_score {
        println!("  validation: {:>5.1}%", score);
    }

    println!("\nContact:");
    println!("  email: {}", report.contact.email.as_deref().unwrap_or("not found"));
    println!("  phone: {}", report.contact.phone.as_deref().unwrap_or("not found"));

    println!("\nWriting:");
    println!("  action verbs: {}", report.action_verbs_count);
    if !report.quantifiable_achievements.is_empty() {
        println!(
            "  quantified achievements: {}",
            report.quantifiable_achievements.join("; ")
        );
    }

    if !report.education.is_empty() {
        println!("\nEducation:");
        for entry in &report.education {
            let mut line = entry.level.to_string();
            if let Some(field) = &entry.field {
                line.push_str(&format!(", {}", field));
            }
            if let Some(institution) = &entry.institution {
                line.push_str(&format!(", {}", institution));
            }
            println!("  {}", line);
        }
    }

    if !report.matched_keywords.is_empty() || !report.missing_keywords.is_empty() {
        println!("\nKeywords:");
        println!("  matched ({}): {}", report.matched_keywords.len(), report.matched_keywords.join(", "));
        println!("  missing ({}): {}", report.missing_keywords.len(), report.missing_keywords.join(", "));
    }
    if !report.matched_skills.is_empty() || !report.missing_skills.is_empty() {
        println!("\nRequired skills:");
        println!("  matched: {}", report.matched_skills.join(", "));
        println!("  missing: {}", report.missing_skills.join(", "));
    }

    banner("Recommendations");
    for (idx, recommendation) in report.recommendations.iter().enumerate() {
        println!("{}. {}", idx + 1, recommendation);
    }
}
