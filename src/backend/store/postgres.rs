/**
 * PostgreSQL Store
 *
 * `sqlx` implementation of the repositories. The schema lives in
 * `migrations/` and is applied by `PgStore::connect`.
 *
 * # Atomicity
 *
 * - `users.email` is `UNIQUE`; registration uses `ON CONFLICT (email) DO NOTHING`.
 * - `profiles.user_id` is `UNIQUE`; upserts use `ON CONFLICT (user_id) DO UPDATE`
 *   with `COALESCE` so absent patch fields keep their stored values.
 * - Account deletion removes the profile and the user in one transaction.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserRepository};
use crate::backend::profile::profiles::{Owner, OwnedProfile, Profile, ProfilePatch, ProfileRepository, Social};
use crate::backend::store::{Store, StoreError};

const USER_COLUMNS: &str = "id, name, email, password_hash, avatar, created_at";

const PROFILE_COLUMNS: &str = "p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status, \
     p.githubusername, COALESCE(p.skills, '{}') AS skills, p.youtube, p.twitter, p.facebook, \
     p.linkedin, p.instagram, p.created_at, p.updated_at";

/// Foreign key violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Flat profile row
#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: Option<String>,
    githubusername: Option<String>,
    skills: Vec<String>,
    youtube: Option<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            user: row.user_id,
            company: row.company,
            website: row.website,
            location: row.location,
            bio: row.bio,
            status: row.status,
            githubusername: row.githubusername,
            skills: row.skills,
            social: Social {
                youtube: row.youtube,
                twitter: row.twitter,
                facebook: row.facebook,
                linkedin: row.linkedin,
                instagram: row.instagram,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Profile row joined with the owner's name and avatar
#[derive(sqlx::FromRow)]
struct OwnedProfileRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    owner_name: String,
    owner_avatar: String,
}

impl From<OwnedProfileRow> for OwnedProfile {
    fn from(row: OwnedProfileRow) -> Self {
        let owner = Owner {
            id: row.profile.user_id,
            name: row.owner_name,
            avatar: row.owner_avatar,
        };
        Profile::from(row.profile).with_owner(owner)
    }
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run migrations
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let user = user.into_user();

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO NOTHING
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.created_at)
        .fetch_optional(&self.pool)
        .await?;

        created.ok_or(StoreError::DuplicateEmail(user.email))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProfileRepository for PgStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<OwnedProfile>, StoreError> {
        let row = sqlx::query_as::<_, OwnedProfileRow>(&format!(
            r#"
            SELECT {}, u.name AS owner_name, u.avatar AS owner_avatar
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1
            "#,
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OwnedProfile::from))
    }

    async fn find_all(&self) -> Result<Vec<OwnedProfile>, StoreError> {
        let rows = sqlx::query_as::<_, OwnedProfileRow>(&format!(
            r#"
            SELECT {}, u.name AS owner_name, u.avatar AS owner_avatar
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at ASC, p.id ASC
            "#,
            PROFILE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OwnedProfile::from).collect())
    }

    async fn upsert_by_user(&self, user_id: Uuid, patch: ProfilePatch) -> Result<Profile, StoreError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            INSERT INTO profiles AS p (
                id, user_id, company, website, location, bio, status, githubusername, skills,
                youtube, twitter, facebook, linkedin, instagram, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            ON CONFLICT (user_id) DO UPDATE SET
                company = COALESCE(EXCLUDED.company, p.company),
                website = COALESCE(EXCLUDED.website, p.website),
                location = COALESCE(EXCLUDED.location, p.location),
                bio = COALESCE(EXCLUDED.bio, p.bio),
                status = COALESCE(EXCLUDED.status, p.status),
                githubusername = COALESCE(EXCLUDED.githubusername, p.githubusername),
                skills = COALESCE(EXCLUDED.skills, p.skills),
                youtube = COALESCE(EXCLUDED.youtube, p.youtube),
                twitter = COALESCE(EXCLUDED.twitter, p.twitter),
                facebook = COALESCE(EXCLUDED.facebook, p.facebook),
                linkedin = COALESCE(EXCLUDED.linkedin, p.linkedin),
                instagram = COALESCE(EXCLUDED.instagram, p.instagram),
                updated_at = EXCLUDED.updated_at
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(patch.company)
        .bind(patch.website)
        .bind(patch.location)
        .bind(patch.bio)
        .bind(patch.status)
        .bind(patch.githubusername)
        .bind(patch.skills)
        .bind(patch.social.youtube)
        .bind(patch.social.twitter)
        .bind(patch.social.facebook)
        .bind(patch.social.linkedin)
        .bind(patch.social.instagram)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let missing_user = matches!(
                &e,
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
            );
            if missing_user {
                StoreError::UnknownUser(user_id)
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn delete_account(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }
}
