use crate::Result as DbErrorResult;

use vibe_core::Image;

use uuid::Uuid;

pub struct ImageRepository;

impl ImageRepository {
    pub async fn insert<'e, E>(executor: E, user_id: Uuid, image: &Image) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO images (id, user_id, data) VALUES (?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(user_id.to_string())
            .bind(image.as_bytes())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM images WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Image>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(Vec<u8>,)> =
            sqlx::query_as("SELECT data FROM images WHERE user_id = ? ORDER BY rowid")
                .bind(user_id.to_string())
                .fetch_all(executor)
                .await?;

        Ok(rows.into_iter().map(|(data,)| Image(data)).collect())
    }
}
