pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{refresh_session, spotify_login},
        login_response::LoginResponse,
        spotify_login_request::SpotifyLoginRequest,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{authenticated_user::AuthenticatedUser, bearer_token::BearerToken},
    profile::profile::{get_profile, update_currently_playing, update_profile},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
