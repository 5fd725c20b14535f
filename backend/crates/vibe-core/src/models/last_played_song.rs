use serde::{Deserialize, Serialize};

/// Track details reported by the client when playback changes.
///
/// Doubles as the request document of the currently-playing update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastPlayedSong {
    pub track: String,
    pub artist: String,
    pub uri: String,
    pub album: String,
    pub album_uri: String,
    /// Duration in milliseconds
    pub duration: i64,
    pub context_title: String,
    pub context_uri: String,
}

impl LastPlayedSong {
    /// `"<track> - <artist>"`, the form stored as the currently-playing descriptor
    pub fn descriptor(&self) -> String {
        format!("{} - {}", self.track, self.artist)
    }
}
