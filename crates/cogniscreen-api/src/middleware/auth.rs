use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use cogniscreen_core::models::user::User;
use cogniscreen_store::users;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user for the current request, inserted by [`require_auth`].
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Bearer-token middleware for protected routes.
///
/// Extracts `Authorization: Bearer <token>`, validates the JWT, then
/// re-resolves the subject to a live user record on every call — a valid
/// token for a since-deleted user is still unauthenticated.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Authorization header missing".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid authorization header".to_string()))?;

    let claims = state
        .tokens
        .decode(token)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let user = users::find_by_id(&state.db, &claims.sub)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
