pub mod blob;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::artist::{Artist, ArtistInput};
pub use models::dating_preference::DatingPreference;
pub use models::delegated_tokens::DelegatedTokens;
pub use models::gender::Gender;
pub use models::image::Image;
pub use models::last_played_song::LastPlayedSong;
pub use models::patch::Patch;
pub use models::playlist::{Playlist, PlaylistInput};
pub use models::profile_fields::ProfileFields;
pub use models::profile_update::ProfileUpdate;
pub use models::prompt::{Prompt, PromptInput};
pub use models::song::{Song, SongInput};
pub use models::user_identity::UserIdentity;
pub use models::user_profile::UserProfile;
pub use models::work_profile::WorkProfile;
