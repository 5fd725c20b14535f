use vibe_core::{ArtistInput, DelegatedTokens, PlaylistInput, PromptInput, SongInput, UserIdentity};

use chrono::{DateTime, Duration, Utc};

/// Current time truncated to whole seconds, the precision the store keeps
pub fn now_secs() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).expect("valid timestamp")
}

pub fn create_test_identity(spotify_uri: &str) -> UserIdentity {
    let tokens = DelegatedTokens::new(
        "access-1".to_string(),
        "refresh-1".to_string(),
        now_secs() + Duration::hours(1),
    );

    let mut user = UserIdentity::new(spotify_uri.to_string(), tokens);
    user.created_at = now_secs();
    user.updated_at = user.created_at;
    user
}

pub fn create_test_prompt(question: &str) -> PromptInput {
    PromptInput {
        question: question.to_string(),
        answer: format!("Answer to {}", question),
    }
}

pub fn create_test_artist(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        uri: format!("spotify:artist:{}", name.to_lowercase()),
        image_url: Some(format!("https://img.example/{}.jpg", name.to_lowercase())),
    }
}

pub fn create_test_song(name: &str, artist: &str) -> SongInput {
    SongInput {
        name: name.to_string(),
        artist: artist.to_string(),
        uri: format!("spotify:track:{}", name.to_lowercase()),
        image_url: None,
    }
}

pub fn create_test_playlist(name: &str) -> PlaylistInput {
    PlaylistInput {
        name: name.to_string(),
        uri: format!("spotify:playlist:{}", name.to_lowercase()),
        image_url: None,
    }
}
