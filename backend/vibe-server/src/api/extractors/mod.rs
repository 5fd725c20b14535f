pub mod authenticated_user;
pub mod bearer_token;
