use cogniscreen_auth::tokens::TokenSigner;
use cogniscreen_store::Database;

/// Shared application state, injected into all route handlers via Axum state.
/// No ambient/global store handle exists anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenSigner,
}
