use crate::error::StorageContext;
use crate::{ProfileError, Result as ProfileResult};

use vibe_core::UserProfile;
use vibe_db::{
    ArtistRepository, ImageRepository, InterestRatingRepository, InterestRepository,
    PlaylistRepository, PromptRepository, SongRepository, UserRepository,
};

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Builds the [`UserProfile`] read model from the user row and its child tables.
pub struct ProfileAggregator;

impl ProfileAggregator {
    /// Read the user and all seven collections.
    ///
    /// Every read runs in one transaction, so the result reflects a single
    /// committed state. A failed collection read aborts the whole call and the
    /// error names the collection.
    pub async fn get_full_profile(pool: &SqlitePool, user_id: Uuid) -> ProfileResult<UserProfile> {
        let mut tx = pool.begin().await.storage("begin profile read")?;

        let user = UserRepository::find_by_id(&mut *tx, user_id)
            .await
            .storage("load user")?
            .ok_or_else(|| ProfileError::user_not_found(user_id))?;

        let mut profile = UserProfile::from_identity(&user);

        profile.images = ImageRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load images")?;
        profile.interests = InterestRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load interests")?;
        profile.interest_rating = InterestRatingRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load interest ratings")?;
        profile.prompts = PromptRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load prompts")?;
        profile.top_artists = ArtistRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load top artists")?;
        profile.top_songs = SongRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load top songs")?;
        profile.saved_playlists = PlaylistRepository::find_by_user(&mut *tx, user_id)
            .await
            .storage("load saved playlists")?;

        tx.commit().await.storage("finish profile read")?;

        debug!("Aggregated profile for user {}", user_id);

        Ok(profile)
    }
}
