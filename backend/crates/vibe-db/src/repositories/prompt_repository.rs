use crate::{Result as DbErrorResult, decode};

use vibe_core::{Prompt, PromptInput};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PromptRow {
    id: String,
    user_id: String,
    question: String,
    answer: String,
}

pub struct PromptRepository;

impl PromptRepository {
    pub async fn insert<'e, E>(
        executor: E,
        user_id: Uuid,
        prompt: &PromptInput,
    ) -> DbErrorResult<Prompt>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO prompts (id, user_id, question, answer) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .bind(&prompt.question)
            .bind(&prompt.answer)
            .execute(executor)
            .await?;

        Ok(Prompt {
            id,
            user_id,
            question: prompt.question.clone(),
            answer: prompt.answer.clone(),
        })
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM prompts WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Prompt>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT id, user_id, question, answer
            FROM prompts
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(Prompt {
                    id: decode::uuid("prompts.id", &r.id)?,
                    user_id: decode::uuid("prompts.user_id", &r.user_id)?,
                    question: r.question,
                    answer: r.answer,
                })
            })
            .collect()
    }
}
