use sqlx::{sqlite::SqliteRow, Row};

use atelier_core::domain::design::{DesignId, DesignRecord};
use atelier_core::recommendation::DesignRequest;

use super::{
    format_timestamp, parse_enum, parse_timestamp, DesignRequestRepository, RepositoryError,
};
use crate::DbPool;

pub struct SqlDesignRequestRepository {
    pool: DbPool,
}

impl SqlDesignRequestRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const SELECT_DESIGN: &str = "SELECT
        id,
        user_id,
        room_type,
        room_size,
        budget,
        color_theme,
        furniture_style,
        lifestyle,
        special_notes,
        status,
        created_at
     FROM design_request";

#[async_trait::async_trait]
impl DesignRequestRepository for SqlDesignRequestRepository {
    async fn save(&self, record: DesignRecord) -> Result<(), RepositoryError> {
        let request = &record.request;
        sqlx::query(
            "INSERT INTO design_request (
                id,
                user_id,
                room_type,
                room_size,
                budget,
                color_theme,
                furniture_style,
                lifestyle,
                special_notes,
                status,
                created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                user_id = excluded.user_id,
                room_type = excluded.room_type,
                room_size = excluded.room_size,
                budget = excluded.budget,
                color_theme = excluded.color_theme,
                furniture_style = excluded.furniture_style,
                lifestyle = excluded.lifestyle,
                special_notes = excluded.special_notes,
                status = excluded.status",
        )
        .bind(&record.id.0)
        .bind(&record.user_id)
        .bind(&request.room_type)
        .bind(&request.room_size)
        .bind(&request.budget)
        .bind(&request.color_theme)
        .bind(&request.furniture_style)
        .bind(&request.lifestyle)
        .bind(&request.special_notes)
        .bind(record.status.as_str())
        .bind(format_timestamp(&record.created_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DesignId) -> Result<Option<DesignRecord>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_DESIGN} WHERE id = ?"))
            .bind(&id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(design_from_row).transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<DesignRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "{SELECT_DESIGN} WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(design_from_row).collect()
    }
}

fn design_from_row(row: SqliteRow) -> Result<DesignRecord, RepositoryError> {
    Ok(DesignRecord {
        id: DesignId(row.try_get("id")?),
        user_id: row.try_get("user_id")?,
        request: DesignRequest {
            room_type: row.try_get("room_type")?,
            room_size: row.try_get("room_size")?,
            budget: row.try_get("budget")?,
            color_theme: row.try_get("color_theme")?,
            furniture_style: row.try_get("furniture_style")?,
            lifestyle: row.try_get("lifestyle")?,
            special_notes: row.try_get("special_notes")?,
        },
        status: parse_enum("status", row.try_get("status")?)?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use atelier_core::domain::design::{DesignId, DesignRecord};
    use atelier_core::recommendation::DesignRequest;

    use super::SqlDesignRequestRepository;
    use crate::migrations;
    use crate::repositories::DesignRequestRepository;
    use crate::{connect_with_settings, DbPool};

    async fn setup_pool() -> DbPool {
        let pool =
            connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect test pool");
        migrations::run_pending(&pool).await.expect("run migrations");
        pool
    }

    fn parse_ts(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).expect("valid rfc3339").with_timezone(&Utc)
    }

    fn record(id: &str, user_id: &str, style: &str, created_at: &str) -> DesignRecord {
        let request = DesignRequest::new(
            "Office",
            "Medium (100–250 sq ft)",
            "₹50,000–₹1,50,000 / $600–$1,800",
            "Cool & Calm",
            style,
            "Work From Home",
        )
        .with_special_notes("Needs a standing desk");
        let mut record =
            DesignRecord::new(user_id, request, parse_ts(created_at)).expect("valid record");
        record.id = DesignId(id.to_string());
        record
    }

    #[tokio::test]
    async fn sql_design_repo_round_trip() {
        let pool = setup_pool().await;
        let repo = SqlDesignRequestRepository::new(pool.clone());
        let design = record("design-rt-1", "user-1", "Industrial", "2026-03-01T10:00:00Z");

        repo.save(design.clone()).await.expect("save");

        let found = repo.find_by_id(&design.id).await.expect("find");
        assert_eq!(found, Some(design));
        assert_eq!(
            repo.find_by_id(&DesignId("design-missing".to_string())).await.expect("find"),
            None
        );

        pool.close().await;
    }

    #[tokio::test]
    async fn sql_design_repo_lists_a_users_designs_newest_first() {
        let pool = setup_pool().await;
        let repo = SqlDesignRequestRepository::new(pool.clone());

        let older = record("design-a", "user-1", "Modern", "2026-03-01T10:00:00Z");
        let newer = record("design-b", "user-1", "Rustic", "2026-03-02T10:00:00Z");
        let other = record("design-c", "user-2", "Modern", "2026-03-03T10:00:00Z");
        for design in [older.clone(), newer.clone(), other] {
            repo.save(design).await.expect("save");
        }

        let listed = repo.list_for_user("user-1").await.expect("list");
        assert_eq!(listed, vec![newer, older]);
        assert!(repo.list_for_user("user-9").await.expect("list").is_empty());

        pool.close().await;
    }
}
