use crate::Result as DbErrorResult;

use std::collections::BTreeMap;

use uuid::Uuid;

pub struct InterestRatingRepository;

impl InterestRatingRepository {
    /// Insert or overwrite the rating for `(user_id, name)`.
    pub async fn upsert<'e, E>(
        executor: E,
        user_id: Uuid,
        name: &str,
        rating: i32,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO interest_ratings (id, user_id, name, rating) VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id, name) DO UPDATE SET rating = excluded.rating
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(name)
        .bind(rating)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM interest_ratings WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(
        executor: E,
        user_id: Uuid,
    ) -> DbErrorResult<BTreeMap<String, i32>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(String, i32)> =
            sqlx::query_as("SELECT name, rating FROM interest_ratings WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_all(executor)
                .await?;

        Ok(rows.into_iter().collect())
    }
}
