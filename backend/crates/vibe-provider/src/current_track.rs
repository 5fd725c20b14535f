use serde::Deserialize;

/// Track reported by the provider as currently playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTrack {
    pub title: String,
    pub artists: Vec<String>,
}

impl CurrentTrack {
    /// `"<title> - <artist1, artist2, ...>"`
    pub fn descriptor(&self) -> String {
        format!("{} - {}", self.title, self.artists.join(", "))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CurrentlyPlayingPayload {
    #[serde(default)]
    item: Option<TrackItem>,
}

#[derive(Debug, Default, Deserialize)]
struct TrackItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    artists: Vec<ArtistRef>,
}

#[derive(Debug, Default, Deserialize)]
struct ArtistRef {
    #[serde(default)]
    name: String,
}

impl CurrentlyPlayingPayload {
    /// `None` when nothing is playing (no item, or an item without a name)
    pub(crate) fn into_track(self) -> Option<CurrentTrack> {
        let item = self.item?;
        if item.name.is_empty() {
            return None;
        }

        Some(CurrentTrack {
            title: item.name,
            artists: item.artists.into_iter().map(|a| a.name).collect(),
        })
    }
}
