use crate::{Result as DbErrorResult, decode};

use vibe_core::{Artist, ArtistInput};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ArtistRow {
    id: String,
    user_id: String,
    name: String,
    uri: String,
    image_url: Option<String>,
}

impl ArtistRow {
    fn into_artist(self) -> DbErrorResult<Artist> {
        Ok(Artist {
            id: decode::uuid("artists.id", &self.id)?,
            user_id: decode::uuid("artists.user_id", &self.user_id)?,
            name: self.name,
            uri: self.uri,
            image_url: self.image_url,
        })
    }
}

pub struct ArtistRepository;

impl ArtistRepository {
    pub async fn insert<'e, E>(
        executor: E,
        user_id: Uuid,
        artist: &ArtistInput,
    ) -> DbErrorResult<Artist>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO artists (id, user_id, name, uri, image_url) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(&artist.name)
        .bind(&artist.uri)
        .bind(&artist.image_url)
        .execute(executor)
        .await?;

        Ok(Artist {
            id,
            user_id,
            name: artist.name.clone(),
            uri: artist.uri.clone(),
            image_url: artist.image_url.clone(),
        })
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM artists WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Artist>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ArtistRow>(
            r#"
            SELECT id, user_id, name, uri, image_url
            FROM artists
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(ArtistRow::into_artist).collect()
    }
}
