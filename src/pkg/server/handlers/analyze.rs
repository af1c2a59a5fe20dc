use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::conf::settings;
use crate::pkg::internal::analysis::report::AnalysisReport;
use crate::pkg::internal::analysis::score::ScoringProfile;
use crate::pkg::internal::analysis::{self, JobRequirements};
use crate::pkg::internal::read::{DocumentFormat, ResumeDocument};
use crate::pkg::server::state::AppState;
use crate::prelude::{AppError, Result};

pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>> {
    let mut document: Option<ResumeDocument> = None;
    let mut job_description: Option<String> = None;
    let mut skills: Option<String> = None;
    let mut education: Option<String> = None;
    let mut profile_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("unknown").to_string();
                let extension = Path::new(&file_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("");
                let format = DocumentFormat::from_extension(extension)?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if data.len() as u64 > settings.max_upload_mb * 1024 * 1024 {
                    return Err(AppError::BadRequest(format!(
                        "file too large, maximum size is {}MB",
                        settings.max_upload_mb
                    )));
                }
                tracing::debug!("received {} ({} bytes)", &file_name, data.len());
                document = Some(ResumeDocument {
                    data: data.into(),
                    format,
                });
            }
            "job_description" => {
                job_description = read_text_field(field).await?;
            }
            "skills" => {
                skills = read_text_field(field).await?;
            }
            "education" => {
                education = read_text_field(field).await?;
            }
            "profile" => {
                profile_name = read_text_field(field).await?;
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
        }
    }

    let document = document
        .ok_or_else(|| AppError::BadRequest("missing 'resume' file field".to_string()))?;
    let scoring: Arc<ScoringProfile> = match profile_name.as_deref() {
        Some(name) => Arc::new(ScoringProfile::from_name(name).ok_or_else(|| {
            AppError::BadRequest(format!("unknown scoring profile '{}'", name))
        })?),
        None => state.scoring.clone(),
    };
    let requirements = JobRequirements {
        description: job_description,
        required_skills: JobRequirements::split_list(skills.as_deref()),
        required_education: JobRequirements::split_list(education.as_deref()),
    };

    let report = analysis::analyze_document(&document, &requirements, &scoring, state.vocab);
    Ok(Json(report))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<Option<String>> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let trimmed = text.trim().to_string();
    Ok((!trimmed.is_empty()).then_some(trimmed))
}
