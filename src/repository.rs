use crate::models::{
    Mistake, OwnerInfo, Screenshot, Solution, Technique, UpdateMistakeRequest,
    UpdateScreenshotRequest, UpdateSolutionRequest, UpdateVideoRequest, User, Video,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// The abstract contract for all persistence operations. Handlers interact
/// with the data layer through this trait only, so the concrete backend
/// (Postgres, in-memory mock) is swappable under test.
///
/// Ownership enforcement comes in two shapes, both preserved from the API
/// contract:
/// - Mistakes/Solutions scope the mutation query itself to the owner; a
///   foreign record is indistinguishable from a missing one.
/// - Techniques/Videos/Screenshots are loaded first and the handler compares
///   owners, so their update/delete methods take no owner argument.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Users ---
    async fn create_user(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<User, sqlx::Error>;
    // Exact-match lookup on the stored email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;

    // --- Mistakes (owner-scoped) ---
    async fn get_mistakes(&self, user_id: Uuid) -> Result<Vec<Mistake>, sqlx::Error>;
    async fn create_mistake(
        &self,
        user_id: Uuid,
        task: String,
        priority: String,
    ) -> Result<Mistake, sqlx::Error>;
    async fn update_mistake(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateMistakeRequest,
    ) -> Result<Option<Mistake>, sqlx::Error>;
    async fn delete_mistake(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Solutions (owner-scoped) ---
    async fn get_solutions(&self, user_id: Uuid) -> Result<Vec<Solution>, sqlx::Error>;
    async fn create_solution(
        &self,
        user_id: Uuid,
        title: String,
        description: Option<String>,
        timeframe: String,
    ) -> Result<Solution, sqlx::Error>;
    async fn update_solution(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateSolutionRequest,
    ) -> Result<Option<Solution>, sqlx::Error>;
    async fn delete_solution(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Techniques (public reads, owner embedded) ---
    async fn get_techniques(&self) -> Result<Vec<Technique>, sqlx::Error>;
    async fn get_technique(&self, id: Uuid) -> Result<Option<Technique>, sqlx::Error>;
    async fn create_technique(
        &self,
        user_id: Uuid,
        title: String,
        category: String,
        description: String,
        tips: Vec<String>,
    ) -> Result<Technique, sqlx::Error>;
    async fn update_technique(
        &self,
        id: Uuid,
        title: Option<String>,
        category: Option<String>,
        description: Option<String>,
        tips: Option<Vec<String>>,
    ) -> Result<Option<Technique>, sqlx::Error>;
    async fn delete_technique(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Videos (public reads, owner embedded) ---
    async fn get_videos(&self) -> Result<Vec<Video>, sqlx::Error>;
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, sqlx::Error>;
    async fn get_videos_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, sqlx::Error>;
    async fn create_video(
        &self,
        user_id: Uuid,
        title: String,
        description: String,
        category: String,
        duration: String,
        url: String,
        thumbnail: String,
    ) -> Result<Video, sqlx::Error>;
    async fn update_video(
        &self,
        id: Uuid,
        req: UpdateVideoRequest,
    ) -> Result<Option<Video>, sqlx::Error>;
    async fn delete_video(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Screenshots (public reads, owner embedded) ---
    async fn get_screenshots(&self) -> Result<Vec<Screenshot>, sqlx::Error>;
    async fn get_screenshot(&self, id: Uuid) -> Result<Option<Screenshot>, sqlx::Error>;
    async fn get_screenshots_by_user(&self, user_id: Uuid) -> Result<Vec<Screenshot>, sqlx::Error>;
    async fn create_screenshot(
        &self,
        user_id: Uuid,
        image_url: String,
        description: String,
    ) -> Result<Screenshot, sqlx::Error>;
    async fn update_screenshot(
        &self,
        id: Uuid,
        req: UpdateScreenshotRequest,
    ) -> Result<Option<Screenshot>, sqlx::Error>;
    async fn delete_screenshot(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

// --- Row types for owner-embedding queries ---

// Techniques, videos and screenshots are always read joined with their owner.
// The flat row is fetched with FromRow and folded into the public model.

#[derive(FromRow)]
struct TechniqueRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    category: String,
    description: String,
    tips: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl From<TechniqueRow> for Technique {
    fn from(row: TechniqueRow) -> Self {
        Technique {
            id: row.id,
            user: OwnerInfo {
                id: row.user_id,
                name: row.owner_name,
                email: row.owner_email,
            },
            title: row.title,
            category: row.category,
            description: row.description,
            tips: row.tips,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct VideoRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    category: String,
    duration: String,
    url: String,
    thumbnail: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: row.id,
            user: OwnerInfo {
                id: row.user_id,
                name: row.owner_name,
                email: row.owner_email,
            },
            title: row.title,
            description: row.description,
            category: row.category,
            duration: row.duration,
            url: row.url,
            thumbnail: row.thumbnail,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct ScreenshotRow {
    id: Uuid,
    user_id: Uuid,
    image_url: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl From<ScreenshotRow> for Screenshot {
    fn from(row: ScreenshotRow) -> Self {
        Screenshot {
            id: row.id,
            user: OwnerInfo {
                id: row.user_id,
                name: row.owner_name,
                email: row.owner_email,
            },
            image_url: row.image_url,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const MISTAKE_COLS: &str = "id, user_id, task, priority, completed, created_at, updated_at";
const SOLUTION_COLS: &str = "id, user_id, title, description, timeframe, created_at, updated_at";

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the
/// PostgreSQL connection pool.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    // --- Users ---

    async fn create_user(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    // --- Mistakes ---

    /// Owner-scoped listing, oldest first.
    async fn get_mistakes(&self, user_id: Uuid) -> Result<Vec<Mistake>, sqlx::Error> {
        sqlx::query_as::<_, Mistake>(&format!(
            "SELECT {MISTAKE_COLS} FROM mistakes WHERE user_id = $1 ORDER BY created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create_mistake(
        &self,
        user_id: Uuid,
        task: String,
        priority: String,
    ) -> Result<Mistake, sqlx::Error> {
        sqlx::query_as::<_, Mistake>(&format!(
            r#"
            INSERT INTO mistakes (id, user_id, task, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING {MISTAKE_COLS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(task)
        .bind(priority)
        .fetch_one(&self.pool)
        .await
    }

    /// Updates a mistake only if `user_id` matches the owner; the scoped WHERE
    /// clause is the authorization gate. COALESCE keeps omitted fields intact.
    async fn update_mistake(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateMistakeRequest,
    ) -> Result<Option<Mistake>, sqlx::Error> {
        sqlx::query_as::<_, Mistake>(&format!(
            r#"
            UPDATE mistakes
            SET task = COALESCE($3, task),
                priority = COALESCE($4, priority),
                completed = COALESCE($5, completed),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {MISTAKE_COLS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(req.task)
        .bind(req.priority)
        .bind(req.completed)
        .fetch_optional(&self.pool)
        .await
    }

    /// Deletes a mistake only if `user_id` matches the owner.
    async fn delete_mistake(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mistakes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Solutions ---

    async fn get_solutions(&self, user_id: Uuid) -> Result<Vec<Solution>, sqlx::Error> {
        sqlx::query_as::<_, Solution>(&format!(
            "SELECT {SOLUTION_COLS} FROM solutions WHERE user_id = $1 ORDER BY created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create_solution(
        &self,
        user_id: Uuid,
        title: String,
        description: Option<String>,
        timeframe: String,
    ) -> Result<Solution, sqlx::Error> {
        sqlx::query_as::<_, Solution>(&format!(
            r#"
            INSERT INTO solutions (id, user_id, title, description, timeframe, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING {SOLUTION_COLS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(timeframe)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_solution(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateSolutionRequest,
    ) -> Result<Option<Solution>, sqlx::Error> {
        sqlx::query_as::<_, Solution>(&format!(
            r#"
            UPDATE solutions
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                timeframe = COALESCE($5, timeframe),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {SOLUTION_COLS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.timeframe)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_solution(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM solutions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Techniques ---

    /// Public listing with the owner joined in, insertion order.
    async fn get_techniques(&self) -> Result<Vec<Technique>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TechniqueRow>(
            r#"
            SELECT t.id, t.user_id, t.title, t.category, t.description, t.tips,
                   t.created_at, t.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM techniques t
            JOIN users u ON u.id = t.user_id
            ORDER BY t.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Technique::from).collect())
    }

    async fn get_technique(&self, id: Uuid) -> Result<Option<Technique>, sqlx::Error> {
        let row = sqlx::query_as::<_, TechniqueRow>(
            r#"
            SELECT t.id, t.user_id, t.title, t.category, t.description, t.tips,
                   t.created_at, t.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM techniques t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Technique::from))
    }

    /// Inserts and returns the enriched record in one round trip via a CTE
    /// joined against `users`.
    async fn create_technique(
        &self,
        user_id: Uuid,
        title: String,
        category: String,
        description: String,
        tips: Vec<String>,
    ) -> Result<Technique, sqlx::Error> {
        let row = sqlx::query_as::<_, TechniqueRow>(
            r#"
            WITH inserted AS (
                INSERT INTO techniques (id, user_id, title, category, description, tips, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
                RETURNING id, user_id, title, category, description, tips, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.title, i.category, i.description, i.tips,
                   i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(category)
        .bind(description)
        .bind(tips)
        .fetch_one(&self.pool)
        .await?;
        Ok(Technique::from(row))
    }

    /// Ownership is checked by the handler (load-then-compare) before this
    /// runs, so the update is keyed on id alone.
    async fn update_technique(
        &self,
        id: Uuid,
        title: Option<String>,
        category: Option<String>,
        description: Option<String>,
        tips: Option<Vec<String>>,
    ) -> Result<Option<Technique>, sqlx::Error> {
        let row = sqlx::query_as::<_, TechniqueRow>(
            r#"
            WITH updated AS (
                UPDATE techniques
                SET title = COALESCE($2, title),
                    category = COALESCE($3, category),
                    description = COALESCE($4, description),
                    tips = COALESCE($5, tips),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, user_id, title, category, description, tips, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.title, i.category, i.description, i.tips,
                   i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM updated i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(category)
        .bind(description)
        .bind(tips)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Technique::from))
    }

    async fn delete_technique(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM techniques WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Videos ---

    /// Public listing with the owner joined in, newest first.
    async fn get_videos(&self) -> Result<Vec<Video>, sqlx::Error> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT v.id, v.user_id, v.title, v.description, v.category, v.duration,
                   v.url, v.thumbnail, v.created_at, v.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM videos v
            JOIN users u ON u.id = v.user_id
            ORDER BY v.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Video::from).collect())
    }

    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT v.id, v.user_id, v.title, v.description, v.category, v.duration,
                   v.url, v.thumbnail, v.created_at, v.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM videos v
            JOIN users u ON u.id = v.user_id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Video::from))
    }

    async fn get_videos_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, sqlx::Error> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT v.id, v.user_id, v.title, v.description, v.category, v.duration,
                   v.url, v.thumbnail, v.created_at, v.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM videos v
            JOIN users u ON u.id = v.user_id
            WHERE v.user_id = $1
            ORDER BY v.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Video::from).collect())
    }

    async fn create_video(
        &self,
        user_id: Uuid,
        title: String,
        description: String,
        category: String,
        duration: String,
        url: String,
        thumbnail: String,
    ) -> Result<Video, sqlx::Error> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            WITH inserted AS (
                INSERT INTO videos (id, user_id, title, description, category, duration, url, thumbnail, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
                RETURNING id, user_id, title, description, category, duration, url, thumbnail, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.title, i.description, i.category, i.duration,
                   i.url, i.thumbnail, i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(duration)
        .bind(url)
        .bind(thumbnail)
        .fetch_one(&self.pool)
        .await?;
        Ok(Video::from(row))
    }

    async fn update_video(
        &self,
        id: Uuid,
        req: UpdateVideoRequest,
    ) -> Result<Option<Video>, sqlx::Error> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            WITH updated AS (
                UPDATE videos
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    category = COALESCE($4, category),
                    duration = COALESCE($5, duration),
                    url = COALESCE($6, url),
                    thumbnail = COALESCE($7, thumbnail),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, user_id, title, description, category, duration, url, thumbnail, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.title, i.description, i.category, i.duration,
                   i.url, i.thumbnail, i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM updated i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.category)
        .bind(req.duration)
        .bind(req.url)
        .bind(req.thumbnail)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Video::from))
    }

    async fn delete_video(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Screenshots ---

    async fn get_screenshots(&self) -> Result<Vec<Screenshot>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ScreenshotRow>(
            r#"
            SELECT s.id, s.user_id, s.image_url, s.description, s.created_at, s.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM screenshots s
            JOIN users u ON u.id = s.user_id
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Screenshot::from).collect())
    }

    async fn get_screenshot(&self, id: Uuid) -> Result<Option<Screenshot>, sqlx::Error> {
        let row = sqlx::query_as::<_, ScreenshotRow>(
            r#"
            SELECT s.id, s.user_id, s.image_url, s.description, s.created_at, s.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM screenshots s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Screenshot::from))
    }

    async fn get_screenshots_by_user(&self, user_id: Uuid) -> Result<Vec<Screenshot>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ScreenshotRow>(
            r#"
            SELECT s.id, s.user_id, s.image_url, s.description, s.created_at, s.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM screenshots s
            JOIN users u ON u.id = s.user_id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Screenshot::from).collect())
    }

    async fn create_screenshot(
        &self,
        user_id: Uuid,
        image_url: String,
        description: String,
    ) -> Result<Screenshot, sqlx::Error> {
        let row = sqlx::query_as::<_, ScreenshotRow>(
            r#"
            WITH inserted AS (
                INSERT INTO screenshots (id, user_id, image_url, description, created_at, updated_at)
                VALUES ($1, $2, $3, $4, NOW(), NOW())
                RETURNING id, user_id, image_url, description, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.image_url, i.description, i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(image_url)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(Screenshot::from(row))
    }

    async fn update_screenshot(
        &self,
        id: Uuid,
        req: UpdateScreenshotRequest,
    ) -> Result<Option<Screenshot>, sqlx::Error> {
        let row = sqlx::query_as::<_, ScreenshotRow>(
            r#"
            WITH updated AS (
                UPDATE screenshots
                SET image_url = COALESCE($2, image_url),
                    description = COALESCE($3, description),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, user_id, image_url, description, created_at, updated_at
            )
            SELECT i.id, i.user_id, i.image_url, i.description, i.created_at, i.updated_at,
                   u.name AS owner_name, u.email AS owner_email
            FROM updated i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(id)
        .bind(req.image_url)
        .bind(req.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Screenshot::from))
    }

    async fn delete_screenshot(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM screenshots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
