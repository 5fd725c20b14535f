use crate::Result as DbErrorResult;

use uuid::Uuid;

pub struct InterestRepository;

impl InterestRepository {
    /// Add an interest; a name the user already has is ignored.
    pub async fn insert<'e, E>(executor: E, user_id: Uuid, name: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO interests (id, user_id, name) VALUES (?, ?, ?)
            ON CONFLICT(user_id, name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(name)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM interests WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<String>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM interests WHERE user_id = ? ORDER BY rowid")
                .bind(user_id.to_string())
                .fetch_all(executor)
                .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
