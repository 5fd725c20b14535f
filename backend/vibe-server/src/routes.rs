use crate::{
    AppState, get_profile, health, refresh_session, spotify_login, update_currently_playing,
    update_profile,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Session issuance
        .route("/auth/spotify", post(spotify_login))
        .route("/auth/refresh", post(refresh_session))
        // Bearer-protected profile endpoints
        .route("/api/profile", get(get_profile).put(update_profile))
        .route(
            "/api/profile/currently-playing",
            put(update_currently_playing),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
