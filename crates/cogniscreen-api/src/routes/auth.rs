use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use cogniscreen_auth::password;
use cogniscreen_core::models::user::{User, UserProfile};
use cogniscreen_store::users;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

fn default_language() -> String {
    "en".to_string()
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    #[serde(default = "default_language")]
    pub preferred_language: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserProfile,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !req.email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Password must not be empty".to_string(),
        ));
    }

    let password_hash = password::hash(&req.password)?;
    let user = User::new(req.email, req.name, req.preferred_language, password_hash);

    // No existence pre-check: the unique email index settles concurrent
    // registrations, and a losing insert maps to 400.
    users::insert(&state.db, &user).await?;

    let access_token = state.tokens.issue(&user.id)?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user: user.profile(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // One failure message for both unknown email and wrong password.
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let user = users::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(invalid)?;

    if !password::verify(&req.password, &user.password_hash)? {
        return Err(invalid());
    }

    let access_token = state.tokens.issue(&user.id)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user: user.profile(),
    }))
}

pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserProfile> {
    Json(user.profile())
}
