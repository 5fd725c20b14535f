use crate::{Result as DbErrorResult, decode};

use vibe_core::blob;
use vibe_core::{
    DatingPreference, DelegatedTokens, Gender, LastPlayedSong, ProfileFields, UserIdentity,
};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

const SELECT_USER: &str = r#"
    SELECT id, spotify_uri, access_token, refresh_token, token_expiry,
           name, university_name, work, home_town, height, age, zodiac,
           currently_playing, last_played_song, user_last_active_at,
           birthday_unix, gender, dating_preference,
           created_at, updated_at
    FROM users
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    spotify_uri: String,
    access_token: String,
    refresh_token: String,
    token_expiry: i64,
    name: Option<String>,
    university_name: Option<String>,
    work: Option<String>,
    home_town: Option<String>,
    height: Option<String>,
    age: Option<String>,
    zodiac: Option<String>,
    currently_playing: Option<String>,
    last_played_song: Option<String>,
    user_last_active_at: Option<i64>,
    birthday_unix: Option<i64>,
    gender: Option<String>,
    dating_preference: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_identity(self) -> DbErrorResult<UserIdentity> {
        let fields = ProfileFields {
            name: self.name,
            university_name: self.university_name,
            work: blob::decode("users.work", self.work.as_deref())?,
            home_town: self.home_town,
            height: self.height,
            age: self.age,
            zodiac: self.zodiac,
            currently_playing: self.currently_playing,
            last_played_song: blob::decode(
                "users.last_played_song",
                self.last_played_song.as_deref(),
            )?,
            user_last_active_at: self.user_last_active_at,
            birthday_unix: self.birthday_unix,
            gender: self.gender.as_deref().map(Gender::from_str).transpose()?,
            dating_preference: self
                .dating_preference
                .as_deref()
                .map(DatingPreference::from_str)
                .transpose()?,
        };

        Ok(UserIdentity {
            id: decode::uuid("users.id", &self.id)?,
            spotify_uri: self.spotify_uri,
            tokens: DelegatedTokens {
                access_token: self.access_token,
                refresh_token: self.refresh_token,
                expires_at: decode::timestamp("users.token_expiry", self.token_expiry)?,
            },
            fields,
            created_at: decode::timestamp("users.created_at", self.created_at)?,
            updated_at: decode::timestamp("users.updated_at", self.updated_at)?,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    /// Insert `user` unless its provider URI is already registered.
    ///
    /// Returns `false` when another row owns the URI; the existing row is left
    /// as it is.
    pub async fn insert_if_absent<'e, E>(executor: E, user: &UserIdentity) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id, spotify_uri, access_token, refresh_token, token_expiry,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(spotify_uri) DO NOTHING
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.spotify_uri)
        .bind(&user.tokens.access_token)
        .bind(&user.tokens.refresh_token)
        .bind(user.tokens.expires_at.timestamp())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(executor)
        .await?;

        let inserted = result.rows_affected() == 1;
        debug!("insert user {}: inserted={}", user.id, inserted);

        Ok(inserted)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<UserIdentity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_USER} WHERE id = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(UserRow::into_identity).transpose()
    }

    pub async fn find_by_spotify_uri<'e, E>(
        executor: E,
        spotify_uri: &str,
    ) -> DbErrorResult<Option<UserIdentity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_USER} WHERE spotify_uri = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(spotify_uri)
            .fetch_optional(executor)
            .await?;

        row.map(UserRow::into_identity).transpose()
    }

    /// Write the editable scalar profile fields in one statement.
    ///
    /// Playback fields are owned by [`UserRepository::update_playback`] and
    /// are not touched here.
    pub async fn update_fields<'e, E>(
        executor: E,
        id: Uuid,
        fields: &ProfileFields,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let work = blob::encode("users.work", fields.work.as_ref())?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, university_name = ?, work = ?, home_town = ?,
                height = ?, age = ?, zodiac = ?, birthday_unix = ?,
                gender = ?, dating_preference = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.university_name)
        .bind(work)
        .bind(&fields.home_town)
        .bind(&fields.height)
        .bind(&fields.age)
        .bind(&fields.zodiac)
        .bind(fields.birthday_unix)
        .bind(fields.gender.map(|g| g.as_str()))
        .bind(fields.dating_preference.map(|p| p.as_str()))
        .bind(updated_at.timestamp())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Replace the stored delegated token triple.
    pub async fn update_tokens<'e, E>(
        executor: E,
        id: Uuid,
        tokens: &DelegatedTokens,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET access_token = ?, refresh_token = ?, token_expiry = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&tokens.access_token)
        .bind(&tokens.refresh_token)
        .bind(tokens.expires_at.timestamp())
        .bind(updated_at.timestamp())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Record playback state.
    ///
    /// `last_played_song` of `None` keeps the stored structure.
    pub async fn update_playback<'e, E>(
        executor: E,
        id: Uuid,
        currently_playing: &str,
        last_played_song: Option<&LastPlayedSong>,
        last_active_at: i64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let song = blob::encode("users.last_played_song", last_played_song)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET currently_playing = ?,
                last_played_song = COALESCE(?, last_played_song),
                user_last_active_at = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(currently_playing)
        .bind(song)
        .bind(last_active_at)
        .bind(last_active_at)
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
