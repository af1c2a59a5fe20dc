use std::sync::Arc;

use crate::conf::settings;
use crate::pkg::internal::analysis::score::ScoringProfile;
use crate::pkg::internal::vocab::{Vocabulary, VOCAB};
use crate::prelude::{AppError, Result};

/// Shared read-only state: the reference vocabularies and the configured
/// default weight table. Safe for concurrent reads, nothing mutates.
#[derive(Clone)]
pub struct AppState {
    pub vocab: &'static Vocabulary,
    pub scoring: Arc<ScoringProfile>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        let scoring = ScoringProfile::from_name(&settings.scoring_profile).ok_or_else(|| {
            AppError::BadRequest(format!(
                "unknown scoring profile '{}'",
                settings.scoring_profile
            ))
        })?;
        Ok(AppState {
            vocab: &VOCAB,
            scoring: Arc::new(scoring),
        })
    }
}
