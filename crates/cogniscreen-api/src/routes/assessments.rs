use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use cogniscreen_core::models::assessment::{Assessment, AssessmentResults};
use cogniscreen_core::models::share_link::DEFAULT_TTL_HOURS;
use cogniscreen_core::scoring;
use cogniscreen_core::time;
use cogniscreen_report::{content, pdf};
use cogniscreen_store::{assessments, share_links};

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::routes::{pdf_attachment, short_id};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SaveRequest {
    pub results: AssessmentResults,
}

/// Score, classify and persist a new assessment. The client never supplies
/// the score or tier; out-of-range scored metrics are rejected outright.
pub async fn save(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<Assessment>, ApiError> {
    let (overall_score, risk_level) = scoring::evaluate(&req.results)?;
    let assessment = Assessment::new(user.id.clone(), req.results, overall_score, risk_level);
    assessments::insert(&state.db, &assessment).await?;
    tracing::info!(
        assessment_id = %assessment.id,
        overall_score,
        risk_level = %risk_level,
        "assessment saved"
    );
    Ok(Json(assessment))
}

fn default_limit() -> i64 {
    10
}

#[derive(Deserialize)]
pub struct HistoryParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub skip: u64,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub assessments: Vec<Assessment>,
    pub total_count: u64,
}

/// A non-positive `limit` would change meaning at the driver level (0 means
/// unlimited, negative caps from the end), so it is rejected up front.
fn page_limit(limit: i64) -> Result<i64, ApiError> {
    if limit <= 0 {
        return Err(ApiError::BadRequest("limit must be positive".to_string()));
    }
    Ok(limit)
}

pub async fn history(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let limit = page_limit(params.limit)?;
    let (page, total_count) = assessments::history(&state.db, &user.id, limit, params.skip).await?;
    Ok(Json(HistoryResponse {
        assessments: page,
        total_count,
    }))
}

pub async fn latest(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Assessment>, ApiError> {
    let assessment = assessments::latest(&state.db, &user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No assessments found".to_string()))?;
    Ok(Json(assessment))
}

/// Owner-only PDF download. A non-owner gets the same 404 as a missing id.
pub async fn download_pdf(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let assessment = assessments::find_owned(&state.db, &id, &user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assessment not found".to_string()))?;

    let bytes = pdf::render(&content::build_report(&assessment, &user))?;
    let filename = format!("cognitive_assessment_{}.pdf", short_id(&assessment.id));
    Ok(pdf_attachment(&filename, bytes))
}

fn default_expiry() -> i64 {
    DEFAULT_TTL_HOURS
}

#[derive(Deserialize)]
pub struct ShareParams {
    #[serde(default = "default_expiry")]
    pub expires_hours: i64,
}

#[derive(Serialize)]
pub struct ShareResponse {
    pub share_token: String,
    pub share_url: String,
    #[serde(with = "time::timestamp")]
    pub expires_at: Timestamp,
}

/// Owner-only share-link creation. Idempotent while a link is active: the
/// existing token comes back with its original expiry.
pub async fn create_share(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Query(params): Query<ShareParams>,
) -> Result<Json<ShareResponse>, ApiError> {
    if params.expires_hours <= 0 {
        return Err(ApiError::BadRequest(
            "expires_hours must be positive".to_string(),
        ));
    }

    let assessment = assessments::find_owned(&state.db, &id, &user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assessment not found".to_string()))?;

    let link = share_links::get_or_create(&state.db, &assessment.id, params.expires_hours).await?;

    Ok(Json(ShareResponse {
        share_url: format!("/shared-report/{}", link.token),
        share_token: link.token,
        expires_at: link.expires_at,
    }))
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::{page_limit, HistoryParams};

    #[test]
    fn history_params_default_paging() {
        let uri: Uri = "/assessments/history".parse().unwrap();
        let Query(params) = Query::<HistoryParams>::try_from_uri(&uri).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.skip, 0);
    }

    #[test]
    fn non_positive_limit_is_rejected() {
        assert!(page_limit(0).is_err());
        assert!(page_limit(-3).is_err());
        assert_eq!(page_limit(25).unwrap(), 25);
    }
}
