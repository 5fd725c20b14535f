use crate::error::StorageContext;
use crate::{ProfileAggregator, ProfileError, Result as ProfileResult};

use vibe_core::{ProfileUpdate, UserProfile};
use vibe_db::{
    ArtistRepository, ImageRepository, InterestRatingRepository, InterestRepository,
    PlaylistRepository, PromptRepository, SongRepository, UserRepository,
};

use chrono::Utc;
use log::{debug, info};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

/// Applies partial profile updates.
pub struct ProfileSynchronizer;

impl ProfileSynchronizer {
    /// Merge `update` into the stored profile and return the recomposed view.
    ///
    /// Loading, validation, the scalar write and every collection replacement
    /// share one transaction: an invalid enum value or any storage failure
    /// leaves the stored profile exactly as it was.
    pub async fn update_profile(
        pool: &SqlitePool,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> ProfileResult<UserProfile> {
        // Writer lock up front: a deferred read-then-write upgrade fails with
        // SQLITE_BUSY_SNAPSHOT instead of waiting on the busy timeout.
        let mut tx = pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .storage("begin profile update")?;

        let user = UserRepository::find_by_id(&mut *tx, user_id)
            .await
            .storage("load user")?
            .ok_or_else(|| ProfileError::user_not_found(user_id))?;

        let mut fields = user.fields;
        update.merge_into(&mut fields)?;

        UserRepository::update_fields(&mut *tx, user_id, &fields, Utc::now())
            .await
            .storage("update profile fields")?;

        Self::replace_collections(&mut tx, user_id, update).await?;

        tx.commit().await.storage("commit profile update")?;

        info!("Updated profile for user {}", user_id);

        ProfileAggregator::get_full_profile(pool, user_id).await
    }

    /// Replace every collection present in `update`; absent ones are untouched.
    async fn replace_collections(
        conn: &mut SqliteConnection,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> ProfileResult<()> {
        if let Some(images) = &update.images {
            ImageRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear images")?;
            for image in images {
                ImageRepository::insert(&mut *conn, user_id, image)
                    .await
                    .storage("insert image")?;
            }
            debug!("Replaced images for user {} ({})", user_id, images.len());
        }

        if let Some(interests) = &update.interests {
            InterestRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear interests")?;
            for name in interests {
                InterestRepository::insert(&mut *conn, user_id, name)
                    .await
                    .storage("insert interest")?;
            }
            debug!("Replaced interests for user {} ({})", user_id, interests.len());
        }

        if let Some(ratings) = &update.interest_rating {
            InterestRatingRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear interest ratings")?;
            for (name, rating) in ratings {
                InterestRatingRepository::upsert(&mut *conn, user_id, name, *rating)
                    .await
                    .storage("upsert interest rating")?;
            }
            debug!(
                "Replaced interest ratings for user {} ({})",
                user_id,
                ratings.len()
            );
        }

        if let Some(prompts) = &update.prompts {
            PromptRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear prompts")?;
            for prompt in prompts {
                PromptRepository::insert(&mut *conn, user_id, prompt)
                    .await
                    .storage("insert prompt")?;
            }
            debug!("Replaced prompts for user {} ({})", user_id, prompts.len());
        }

        if let Some(artists) = &update.top_artists {
            ArtistRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear top artists")?;
            for artist in artists {
                ArtistRepository::insert(&mut *conn, user_id, artist)
                    .await
                    .storage("insert top artist")?;
            }
            debug!("Replaced top artists for user {} ({})", user_id, artists.len());
        }

        if let Some(songs) = &update.top_songs {
            SongRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear top songs")?;
            for song in songs {
                SongRepository::insert(&mut *conn, user_id, song)
                    .await
                    .storage("insert top song")?;
            }
            debug!("Replaced top songs for user {} ({})", user_id, songs.len());
        }

        if let Some(playlists) = &update.saved_playlists {
            PlaylistRepository::delete_for_user(&mut *conn, user_id)
                .await
                .storage("clear saved playlists")?;
            for playlist in playlists {
                PlaylistRepository::insert(&mut *conn, user_id, playlist)
                    .await
                    .storage("insert saved playlist")?;
            }
            debug!(
                "Replaced saved playlists for user {} ({})",
                user_id,
                playlists.len()
            );
        }

        Ok(())
    }
}
