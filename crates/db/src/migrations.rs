use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

/// Embedded from `migrations/` at the workspace root.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::{run_pending, MIGRATOR};
    use crate::{connect_with_settings, DbPool};

    const TABLES: [&str; 4] = ["design_request", "designer", "booking", "payment"];
    const INDEXES: [&str; 5] = [
        "idx_design_request_user_id",
        "idx_design_request_furniture_style",
        "idx_booking_user_id",
        "idx_booking_created_at",
        "idx_payment_booking_id",
    ];

    async fn migrated_pool() -> DbPool {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        run_pending(&pool).await.expect("run migrations");
        pool
    }

    /// `(name, sql)` for every table and index the baseline owns, sorted by name.
    async fn owned_schema(pool: &DbPool) -> Vec<(String, String)> {
        let mut objects: Vec<(String, String)> = sqlx::query_as(
            "SELECT name, IFNULL(sql, '') FROM sqlite_master WHERE type IN ('table', 'index')",
        )
        .fetch_all(pool)
        .await
        .expect("read sqlite_master");
        objects.retain(|(name, _)| {
            TABLES.contains(&name.as_str()) || INDEXES.contains(&name.as_str())
        });
        objects.sort();
        objects
    }

    #[tokio::test]
    async fn baseline_creates_every_table_and_index() {
        let pool = migrated_pool().await;

        let names: Vec<String> =
            owned_schema(&pool).await.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), TABLES.len() + INDEXES.len(), "{names:?}");

        let applied: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE version = 1")
                .fetch_one(&pool)
                .await
                .expect("migration ledger");
        assert_eq!(applied, 1);
    }

    #[tokio::test]
    async fn running_twice_is_a_no_op() {
        let pool = migrated_pool().await;
        let before = owned_schema(&pool).await;

        run_pending(&pool).await.expect("second run");

        assert_eq!(owned_schema(&pool).await, before);
    }

    #[tokio::test]
    async fn undo_then_redo_restores_the_same_schema() {
        let pool = migrated_pool().await;
        let original = owned_schema(&pool).await;

        MIGRATOR.undo(&pool, 0).await.expect("undo migrations");
        assert!(owned_schema(&pool).await.is_empty(), "down migration should drop everything");

        run_pending(&pool).await.expect("re-run migrations");
        assert_eq!(owned_schema(&pool).await, original);
    }
}
