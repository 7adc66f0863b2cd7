use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::scorer::MatchReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub cv_text: String,
    pub job_description: String,
}

/// POST /cv-match
pub async fn handle_cv_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    debug!(
        cv_chars = req.cv_text.len(),
        jd_chars = req.job_description.len(),
        "scoring cv against job description"
    );
    let report = state
        .scorer
        .score(&req.cv_text, &req.job_description)
        .await?;
    Ok(Json(report))
}
