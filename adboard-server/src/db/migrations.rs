//! Startup provisioning of the advertisement table
//!
//! Idempotent: safe to run on every start.

use sqlx::PgPool;

/// Create the advertisement table and its indexes if absent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS app_advs (
            id BIGSERIAL PRIMARY KEY,
            header VARCHAR(100) NOT NULL,
            description VARCHAR(1000) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            owner VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for lookup by header and owner
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_app_advs_header ON app_advs(header)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_app_advs_owner ON app_advs(owner)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn run_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
