pub mod artist;
pub mod dating_preference;
pub mod delegated_tokens;
pub mod gender;
pub mod image;
pub mod last_played_song;
pub mod patch;
pub mod playlist;
pub mod profile_fields;
pub mod profile_update;
pub mod prompt;
pub mod song;
pub mod user_identity;
pub mod user_profile;
pub mod work_profile;
