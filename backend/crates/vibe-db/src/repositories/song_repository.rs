use crate::{Result as DbErrorResult, decode};

use vibe_core::{Song, SongInput};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct SongRow {
    id: String,
    user_id: String,
    name: String,
    artist: String,
    uri: String,
    image_url: Option<String>,
}

pub struct SongRepository;

impl SongRepository {
    pub async fn insert<'e, E>(executor: E, user_id: Uuid, song: &SongInput) -> DbErrorResult<Song>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO songs (id, user_id, name, artist, uri, image_url)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(&song.name)
        .bind(&song.artist)
        .bind(&song.uri)
        .bind(&song.image_url)
        .execute(executor)
        .await?;

        Ok(Song {
            id,
            user_id,
            name: song.name.clone(),
            artist: song.artist.clone(),
            uri: song.uri.clone(),
            image_url: song.image_url.clone(),
        })
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM songs WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Song>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, user_id, name, artist, uri, image_url
            FROM songs
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(Song {
                    id: decode::uuid("songs.id", &r.id)?,
                    user_id: decode::uuid("songs.user_id", &r.user_id)?,
                    name: r.name,
                    artist: r.artist,
                    uri: r.uri,
                    image_url: r.image_url,
                })
            })
            .collect()
    }
}
