//! Repository for the `announcements` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

/// Column list for `announcements` queries.
const COLUMNS: &str = "id, condominium_id, author_id, title, body, kind, priority, \
                        audience, is_published, published_at, expires_at, \
                        created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Draft a new announcement, returning the created row. Drafts start
    /// unpublished.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements
                (condominium_id, author_id, title, body, kind, priority, audience, expires_at)
             VALUES ($1, $2, $3, $4,
                     COALESCE($5, 'general'), COALESCE($6, 'medium'), COALESCE($7, 'all'), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(input.condominium_id)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.kind)
            .bind(&input.priority)
            .bind(&input.audience)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an announcement by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all announcements of a condominium, newest first (admin view,
    /// drafts included).
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements \
             WHERE condominium_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(condominium_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List published, unexpired announcements visible to the given audience,
    /// newest first.
    ///
    /// `audience` is the caller's group (`owners` or `tenants`); rows
    /// addressed to `all` are always included.
    pub async fn list_published(
        pool: &PgPool,
        condominium_id: DbId,
        audience: &str,
        limit: i64,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements \
             WHERE condominium_id = $1 \
               AND is_published = true \
               AND (expires_at IS NULL OR expires_at > NOW()) \
               AND (audience = 'all' OR audience = $2) \
             ORDER BY published_at DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(condominium_id)
            .bind(audience)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                kind = COALESCE($4, kind),
                priority = COALESCE($5, priority),
                audience = COALESCE($6, audience),
                expires_at = COALESCE($7, expires_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.kind)
            .bind(&input.priority)
            .bind(&input.audience)
            .bind(input.expires_at)
            .fetch_optional(pool)
            .await
    }

    /// Publish an announcement. `published_at` is stamped on first publish
    /// and preserved on re-publish.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                is_published = true,
                published_at = COALESCE(published_at, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
