use crate::{Artist, Image, Playlist, ProfileFields, Prompt, Song, UserIdentity};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read model composed from the user row and every child collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ProfileFields,
    pub images: Vec<Image>,
    pub interests: Vec<String>,
    pub interest_rating: BTreeMap<String, i32>,
    pub prompts: Vec<Prompt>,
    pub top_artists: Vec<Artist>,
    pub top_songs: Vec<Song>,
    pub saved_playlists: Vec<Playlist>,
}

impl UserProfile {
    /// Profile with the user's scalar fields and no collection entries
    pub fn from_identity(user: &UserIdentity) -> Self {
        Self {
            id: user.id,
            fields: user.fields.clone(),
            images: Vec::new(),
            interests: Vec::new(),
            interest_rating: BTreeMap::new(),
            prompts: Vec::new(),
            top_artists: Vec::new(),
            top_songs: Vec::new(),
            saved_playlists: Vec::new(),
        }
    }
}
