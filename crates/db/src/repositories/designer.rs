use sqlx::{sqlite::SqliteRow, Row};

use atelier_core::domain::designer::{Designer, DesignerId};

use super::{parse_decimal, parse_enum, DesignerRepository, RepositoryError};
use crate::DbPool;

pub struct SqlDesignerRepository {
    pool: DbPool,
}

impl SqlDesignerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DesignerRepository for SqlDesignerRepository {
    async fn save(&self, designer: Designer) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO designer (
                id,
                name,
                specialization,
                experience,
                rating,
                hourly_rate,
                availability,
                image_url
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                specialization = excluded.specialization,
                experience = excluded.experience,
                rating = excluded.rating,
                hourly_rate = excluded.hourly_rate,
                availability = excluded.availability,
                image_url = excluded.image_url",
        )
        .bind(&designer.id.0)
        .bind(&designer.name)
        .bind(&designer.specialization)
        .bind(&designer.experience)
        .bind(designer.rating.to_string())
        .bind(designer.hourly_rate.to_string())
        .bind(designer.availability.as_str())
        .bind(designer.image_url.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DesignerId) -> Result<Option<Designer>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, specialization, experience, rating, hourly_rate, availability,
                    image_url
             FROM designer
             WHERE id = ?",
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(designer_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Designer>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, specialization, experience, rating, hourly_rate, availability,
                    image_url
             FROM designer
             ORDER BY CAST(rating AS REAL) DESC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(designer_from_row).collect()
    }
}

fn designer_from_row(row: SqliteRow) -> Result<Designer, RepositoryError> {
    Ok(Designer {
        id: DesignerId(row.try_get("id")?),
        name: row.try_get("name")?,
        specialization: row.try_get("specialization")?,
        experience: row.try_get("experience")?,
        rating: parse_decimal("rating", row.try_get("rating")?)?,
        hourly_rate: parse_decimal("hourly_rate", row.try_get("hourly_rate")?)?,
        availability: parse_enum("availability", row.try_get("availability")?)?,
        image_url: row.try_get("image_url")?,
    })
}
