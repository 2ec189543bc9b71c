use sqlx::{sqlite::SqliteRow, Row};

use atelier_core::domain::booking::{
    Booking, BookingId, BookingStatus, Payment, PaymentId, TransactionId,
};
use atelier_core::domain::design::DesignId;
use atelier_core::domain::designer::DesignerId;

use super::{
    format_timestamp, parse_date, parse_decimal, parse_enum, parse_timestamp, BookingRepository,
    RepositoryError,
};
use crate::DbPool;

pub struct SqlBookingRepository {
    pool: DbPool,
}

impl SqlBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const SELECT_BOOKING: &str = "SELECT
        id,
        user_id,
        design_id,
        designer_id,
        designer_name,
        booking_date,
        time_slot,
        service_type,
        amount,
        payment_status,
        status,
        created_at
     FROM booking";

#[async_trait::async_trait]
impl BookingRepository for SqlBookingRepository {
    async fn create(&self, booking: Booking, payment: Payment) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO booking (
                id,
                user_id,
                design_id,
                designer_id,
                designer_name,
                booking_date,
                time_slot,
                service_type,
                amount,
                payment_status,
                status,
                created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.id.0)
        .bind(&booking.user_id)
        .bind(booking.design_id.as_ref().map(|id| id.0.as_str()))
        .bind(booking.designer_id.as_ref().map(|id| id.0.as_str()))
        .bind(&booking.designer_name)
        .bind(booking.booking_date.format("%Y-%m-%d").to_string())
        .bind(&booking.time_slot)
        .bind(&booking.service_type)
        .bind(booking.amount.to_string())
        .bind(booking.payment_status.as_str())
        .bind(booking.status.as_str())
        .bind(format_timestamp(&booking.created_at))
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO payment (
                id,
                booking_id,
                user_id,
                amount,
                method,
                transaction_id,
                status,
                created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payment.id.0)
        .bind(&payment.booking_id.0)
        .bind(&payment.user_id)
        .bind(payment.amount.to_string())
        .bind(&payment.method)
        .bind(&payment.transaction_id.0)
        .bind(payment.status.as_str())
        .bind(format_timestamp(&payment.created_at))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_BOOKING} WHERE id = ?"))
            .bind(&id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(booking_from_row).transpose()
    }

    async fn find_payment(
        &self,
        booking_id: &BookingId,
    ) -> Result<Option<Payment>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, booking_id, user_id, amount, method, transaction_id, status, created_at
             FROM payment
             WHERE booking_id = ?
             ORDER BY created_at ASC
             LIMIT 1",
        )
        .bind(&booking_id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(payment_from_row).transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "{SELECT_BOOKING} WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(booking_from_row).collect()
    }

    async fn list_all(&self) -> Result<Vec<Booking>, RepositoryError> {
        let rows = sqlx::query(&format!("{SELECT_BOOKING} ORDER BY created_at DESC, id DESC"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(booking_from_row).collect()
    }

    async fn update_status(
        &self,
        id: &BookingId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE booking SET status = ? WHERE id = ? AND status = ?")
            .bind(to.as_str())
            .bind(&id.0)
            .bind(from.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn booking_from_row(row: SqliteRow) -> Result<Booking, RepositoryError> {
    Ok(Booking {
        id: BookingId(row.try_get("id")?),
        user_id: row.try_get("user_id")?,
        design_id: row.try_get::<Option<String>, _>("design_id")?.map(DesignId),
        designer_id: row.try_get::<Option<String>, _>("designer_id")?.map(DesignerId),
        designer_name: row.try_get("designer_name")?,
        booking_date: parse_date("booking_date", row.try_get("booking_date")?)?,
        time_slot: row.try_get("time_slot")?,
        service_type: row.try_get("service_type")?,
        amount: parse_decimal("amount", row.try_get("amount")?)?,
        payment_status: parse_enum("payment_status", row.try_get("payment_status")?)?,
        status: parse_enum("status", row.try_get("status")?)?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
    })
}

fn payment_from_row(row: SqliteRow) -> Result<Payment, RepositoryError> {
    Ok(Payment {
        id: PaymentId(row.try_get("id")?),
        booking_id: BookingId(row.try_get("booking_id")?),
        user_id: row.try_get("user_id")?,
        amount: parse_decimal("amount", row.try_get("amount")?)?,
        method: row.try_get("method")?,
        transaction_id: TransactionId(row.try_get("transaction_id")?),
        status: parse_enum("status", row.try_get("status")?)?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
    })
}
