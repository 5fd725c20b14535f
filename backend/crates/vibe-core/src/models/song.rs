use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub artist: String,
    pub uri: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInput {
    pub name: String,
    #[serde(default)]
    pub artist: String,
    pub uri: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
