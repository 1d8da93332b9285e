use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use cogniscreen_auth::tokens::{TokenSigner, DEFAULT_TTL_HOURS};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mongodb_uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = env::var("COGNISCREEN_DB").unwrap_or_else(|_| "cogniscreen".to_string());
    let jwt_secret =
        env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-in-production".to_string());
    let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TTL_HOURS);
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let db = cogniscreen_store::client::connect(&mongodb_uri, &db_name).await?;
    cogniscreen_store::client::ensure_indexes(&db).await?;

    let state = AppState {
        db,
        tokens: TokenSigner::new(&jwt_secret, token_ttl_hours),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public: registration, login, and tokenized share-link access.
    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route(
            "/reports/shared/{token}",
            get(routes::shared::view_shared_report),
        )
        .route(
            "/reports/shared/{token}/pdf",
            get(routes::shared::download_shared_pdf),
        );

    // Protected: everything behind bearer auth.
    let protected = Router::new()
        .route("/auth/me", get(routes::auth::me))
        .route("/assessments/save", post(routes::assessments::save))
        .route("/assessments/history", get(routes::assessments::history))
        .route("/assessments/latest", get(routes::assessments::latest))
        .route(
            "/assessments/{id}/pdf",
            get(routes::assessments::download_pdf),
        )
        .route(
            "/assessments/{id}/share",
            post(routes::assessments::create_share),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::logging::request_log))
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
