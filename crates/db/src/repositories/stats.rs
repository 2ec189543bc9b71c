use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;

use super::{parse_decimal, RepositoryError, StatsRepository};
use crate::DbPool;

/// Platform totals shown on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    /// Distinct users that saved a design or made a booking.
    pub clients: u64,
    pub designs: u64,
    pub bookings: u64,
    /// Sum of all recorded payments.
    pub revenue: Decimal,
    /// Design requests per furniture style, most requested first.
    pub popular_styles: Vec<StyleCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCount {
    pub style: String,
    pub count: u64,
}

pub struct SqlStatsRepository {
    pool: DbPool,
}

impl SqlStatsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StatsRepository for SqlStatsRepository {
    async fn admin_stats(&self) -> Result<AdminStats, RepositoryError> {
        let clients: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM (
                SELECT user_id FROM design_request
                UNION
                SELECT user_id FROM booking
             )",
        )
        .fetch_one(&self.pool)
        .await?;
        let designs: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM design_request").fetch_one(&self.pool).await?;
        let bookings: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM booking").fetch_one(&self.pool).await?;

        // Amounts are stored as decimal text; summing in SQL would go through floats.
        let amounts: Vec<String> =
            sqlx::query_scalar("SELECT amount FROM payment").fetch_all(&self.pool).await?;
        let revenue = amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
            parse_decimal("amount", amount).map(|amount| total + amount)
        })?;

        let popular_styles = sqlx::query(
            "SELECT furniture_style, COUNT(*) AS count
             FROM design_request
             GROUP BY furniture_style
             ORDER BY count DESC, furniture_style ASC",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| -> Result<StyleCount, RepositoryError> {
            Ok(StyleCount {
                style: row.try_get("furniture_style")?,
                count: parse_count("count", row.try_get("count")?)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(AdminStats {
            clients: parse_count("clients", clients)?,
            designs: parse_count("designs", designs)?,
            bookings: parse_count("bookings", bookings)?,
            revenue,
            popular_styles,
        })
    }
}

fn parse_count(column: &str, value: i64) -> Result<u64, RepositoryError> {
    u64::try_from(value).map_err(|_| {
        RepositoryError::Decode(format!("invalid value for `{column}` (expected a count): {value}"))
    })
}
