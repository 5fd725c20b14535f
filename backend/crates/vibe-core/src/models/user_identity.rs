use crate::{DelegatedTokens, ProfileFields};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persisted user record: identity, provider credentials and scalar profile fields
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub id: Uuid,
    /// Provider account URI; unique and never changed after creation
    pub spotify_uri: String,
    pub tokens: DelegatedTokens,
    pub fields: ProfileFields,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    pub fn new(spotify_uri: String, tokens: DelegatedTokens) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            spotify_uri,
            tokens,
            fields: ProfileFields::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
