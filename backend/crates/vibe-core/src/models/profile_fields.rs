use crate::{DatingPreference, Gender, LastPlayedSong, WorkProfile};

use serde::{Deserialize, Serialize};

/// Mutable scalar attributes of a user. Every field is independently nullable;
/// `None` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub university_name: Option<String>,
    pub work: Option<WorkProfile>,
    pub home_town: Option<String>,
    pub height: Option<String>,
    pub age: Option<String>,
    pub zodiac: Option<String>,
    pub currently_playing: Option<String>,
    pub last_played_song: Option<LastPlayedSong>,
    pub user_last_active_at: Option<i64>,
    /// Birth date as a unix timestamp
    #[serde(rename = "birthdayInUnix")]
    pub birthday_unix: Option<i64>,
    pub gender: Option<Gender>,
    pub dating_preference: Option<DatingPreference>,
}
