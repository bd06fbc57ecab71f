//! Advertisement repository
//!
//! CRUD over the `app_advs` table. Every method runs on the connection
//! the handler acquired for the request, so the scope of a request is
//! exactly the lifetime of that borrow. Each write is one statement:
//! it commits when it completes, and a partial update binds NULL for
//! absent fields so COALESCE leaves them untouched.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::models::{AdvertDraft, AdvertPatch};

/// Advertisement record from database
#[derive(Debug, Clone, FromRow)]
pub struct Advert {
    pub id: i64,
    pub header: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub owner: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

const RESOURCE: &str = "Advertisement";

/// Advertisement repository, bound to one request's connection
pub struct AdvertRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AdvertRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Fetch a single advertisement by id.
    pub async fn load(&mut self, id: i64) -> Result<Advert, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, header, description, created_at, owner
            FROM app_advs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound { resource: RESOURCE, id })
    }

    /// Insert a new advertisement; the database assigns id and created_at.
    pub async fn create(&mut self, draft: AdvertDraft) -> Result<Advert, DbError> {
        let advert = sqlx::query_as(
            r#"
            INSERT INTO app_advs (header, description, owner)
            VALUES ($1, $2, $3)
            RETURNING id, header, description, created_at, owner
            "#,
        )
        .bind(&draft.header)
        .bind(&draft.description)
        .bind(&draft.owner)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(advert)
    }

    /// Apply a partial update and return the updated record.
    ///
    /// Absent patch fields bind NULL and coalesce to the current value,
    /// so an empty patch returns the row unchanged.
    pub async fn update(&mut self, id: i64, patch: AdvertPatch) -> Result<Advert, DbError> {
        sqlx::query_as(
            r#"
            UPDATE app_advs
            SET header = COALESCE($2, header),
                description = COALESCE($3, description),
                owner = COALESCE($4, owner)
            WHERE id = $1
            RETURNING id, header, description, created_at, owner
            "#,
        )
        .bind(id)
        .bind(patch.header.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.owner.as_deref())
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound { resource: RESOURCE, id })
    }

    /// Delete an advertisement by id.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let deleted: Option<(i64,)> = sqlx::query_as(
            r#"
            DELETE FROM app_advs
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound { resource: RESOURCE, id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use sqlx::PgPool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p adboard-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn draft(header: &str, description: &str, owner: &str) -> AdvertDraft {
        AdvertDraft {
            header: header.to_owned(),
            description: description.to_owned(),
            owner: owner.to_owned(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_load_round_trip() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let created = repo.create(draft("h1", "d1", "o1")).await.unwrap();
        let loaded = repo.load(created.id).await.unwrap();

        assert_eq!(loaded.id, created.id);
        assert_eq!(loaded.header, "h1");
        assert_eq!(loaded.description, "d1");
        assert_eq!(loaded.owner, "o1");
        assert_eq!(loaded.created_at, created.created_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_fresh_ids() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let first = repo.create(draft("h", "d", "o")).await.unwrap();
        let second = repo.create(draft("h", "d", "o")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_changes_only_present_fields() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let created = repo.create(draft("h1", "d1", "o1")).await.unwrap();

        let patch = AdvertPatch {
            owner: Some("o2".to_owned()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap();

        assert_eq!(updated.owner, "o2");
        assert_eq!(updated.header, "h1");
        assert_eq!(updated.description, "d1");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn empty_patch_leaves_record_unchanged() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let created = repo.create(draft("h1", "d1", "o1")).await.unwrap();
        let updated = repo.update(created.id, AdvertPatch::default()).await.unwrap();

        assert_eq!(updated.header, created.header);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.owner, created.owner);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_is_terminal() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let created = repo.create(draft("h1", "d1", "o1")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        let err = repo.load(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_id_is_not_found() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let err = repo.load(i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = repo
            .update(i64::MAX, AdvertPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_payloads_are_permitted() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = AdvertRepo::new(&mut conn);

        let first = repo.create(draft("same", "same", "same")).await.unwrap();
        let second = repo.create(draft("same", "same", "same")).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
