pub mod auth;
pub mod login_response;
pub mod spotify_login_request;
pub mod token_response;
