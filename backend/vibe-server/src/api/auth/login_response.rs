use vibe_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// `null` for accounts created by this login
    pub user: Option<UserProfile>,
    pub is_new_user: bool,
}
