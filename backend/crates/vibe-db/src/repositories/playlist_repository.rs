use crate::{Result as DbErrorResult, decode};

use vibe_core::{Playlist, PlaylistInput};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PlaylistRow {
    id: String,
    user_id: String,
    name: String,
    uri: String,
    image_url: Option<String>,
}

pub struct PlaylistRepository;

impl PlaylistRepository {
    pub async fn insert<'e, E>(
        executor: E,
        user_id: Uuid,
        playlist: &PlaylistInput,
    ) -> DbErrorResult<Playlist>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO playlists (id, user_id, name, uri, image_url) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(&playlist.name)
        .bind(&playlist.uri)
        .bind(&playlist.image_url)
        .execute(executor)
        .await?;

        Ok(Playlist {
            id,
            user_id,
            name: playlist.name.clone(),
            uri: playlist.uri.clone(),
            image_url: playlist.image_url.clone(),
        })
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM playlists WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Playlist>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, user_id, name, uri, image_url
            FROM playlists
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(Playlist {
                    id: decode::uuid("playlists.id", &r.id)?,
                    user_id: decode::uuid("playlists.user_id", &r.user_id)?,
                    name: r.name,
                    uri: r.uri,
                    image_url: r.image_url,
                })
            })
            .collect()
    }
}
