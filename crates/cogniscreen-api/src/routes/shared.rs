//! Public share-token routes. No bearer auth: possession of an unexpired
//! token is the credential. Every successful dereference — view or PDF —
//! counts against `accessed_count`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use jiff::Timestamp;
use serde::Serialize;

use cogniscreen_core::models::assessment::Assessment;
use cogniscreen_core::models::share_link::ShareLink;
use cogniscreen_core::time;
use cogniscreen_report::{content, pdf};
use cogniscreen_store::share_links::{self, ShareAccess};
use cogniscreen_store::{assessments, users, Database};

use crate::error::ApiError;
use crate::routes::{pdf_attachment, short_id};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SharedReportResponse {
    pub assessment: Assessment,
    pub patient_name: String,
    #[serde(with = "time::timestamp")]
    pub shared_at: Timestamp,
    #[serde(with = "time::timestamp")]
    pub expires_at: Timestamp,
}

/// Unknown tokens 404; expired tokens 410. The two are never conflated.
async fn resolve_active(db: &Database, token: &str) -> Result<ShareLink, ApiError> {
    match share_links::resolve(db, token).await? {
        ShareAccess::Active(link) => Ok(link),
        ShareAccess::Expired => Err(ApiError::Gone("Share link has expired".to_string())),
        ShareAccess::Unknown => Err(ApiError::NotFound("Share link not found".to_string())),
    }
}

pub async fn view_shared_report(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<SharedReportResponse>, ApiError> {
    let link = resolve_active(&state.db, &token).await?;

    let assessment = assessments::find_by_id(&state.db, &link.assessment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assessment not found".to_string()))?;

    let patient_name = users::find_by_id(&state.db, &assessment.user_id)
        .await?
        .map(|u| u.name)
        .unwrap_or_else(|| "N/A".to_string());

    Ok(Json(SharedReportResponse {
        assessment,
        patient_name,
        shared_at: link.created_at,
        expires_at: link.expires_at,
    }))
}

pub async fn download_shared_pdf(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let link = resolve_active(&state.db, &token).await?;

    let assessment = assessments::find_by_id(&state.db, &link.assessment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assessment not found".to_string()))?;

    let user = users::find_by_id(&state.db, &assessment.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let bytes = pdf::render(&content::build_report(&assessment, &user))?;
    let filename = format!("shared_assessment_{}.pdf", short_id(&link.assessment_id));
    Ok(pdf_attachment(&filename, bytes))
}
