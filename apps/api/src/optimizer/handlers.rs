//! Axum route handlers for the profile analysis API.

use axum::{body::Bytes, extract::State, Json};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, PROFILE_REQUIRED};
use crate::optimizer::models::{AnalyzeRequest, OptimizationResult};
use crate::optimizer::service::optimize_profile;
use crate::state::AppState;

/// POST /api/linkedin/analyze
///
/// Optimizes manually entered profile data. The body is read as JSON whatever
/// its content type. A body that does not parse is a 500; one without
/// `profileData`, including one carrying only `linkedinUrl`, is a 400.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizationResult>, AppError> {
    let request: AnalyzeRequest = serde_json::from_slice(&body)?;

    let Some(profile) = request.profile_data else {
        if request.linkedin_url.is_some() {
            warn!("linkedinUrl submitted without profileData; URL analysis is not supported");
        }
        return Err(AppError::Validation(PROFILE_REQUIRED.to_string()));
    };

    let span = info_span!("analyze", request_id = %Uuid::new_v4());
    let result = optimize_profile(&profile, state.generator.as_ref())
        .instrument(span)
        .await?;

    Ok(Json(result))
}
