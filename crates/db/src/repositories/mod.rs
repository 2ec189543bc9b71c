use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use atelier_core::domain::booking::{Booking, BookingId, BookingStatus, Payment};
use atelier_core::domain::design::{DesignId, DesignRecord};
use atelier_core::domain::designer::{Designer, DesignerId};

pub mod booking;
pub mod design;
pub mod designer;
pub mod memory;
pub mod stats;

pub use booking::SqlBookingRepository;
pub use design::SqlDesignRequestRepository;
pub use designer::SqlDesignerRepository;
pub use memory::{
    InMemoryBookingRepository, InMemoryDesignRequestRepository, InMemoryDesignerRepository,
};
pub use stats::{AdminStats, SqlStatsRepository, StyleCount};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DesignRequestRepository: Send + Sync {
    async fn save(&self, record: DesignRecord) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: &DesignId) -> Result<Option<DesignRecord>, RepositoryError>;
    /// Newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<DesignRecord>, RepositoryError>;
}

#[async_trait]
pub trait DesignerRepository: Send + Sync {
    async fn save(&self, designer: Designer) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: &DesignerId) -> Result<Option<Designer>, RepositoryError>;
    /// Highest rated first.
    async fn list(&self) -> Result<Vec<Designer>, RepositoryError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a booking together with the payment that settles it.
    async fn create(&self, booking: Booking, payment: Payment) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError>;
    async fn find_payment(&self, booking_id: &BookingId)
        -> Result<Option<Payment>, RepositoryError>;
    /// Newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, RepositoryError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<Booking>, RepositoryError>;
    /// Moves a booking from `from` to `to` only while it still holds `from`.
    /// Returns `false` when no booking has the given id or its status has moved on.
    async fn update_status(
        &self,
        id: &BookingId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn admin_stats(&self) -> Result<AdminStats, RepositoryError>;
}

/// Fixed-width UTC timestamps so that text ordering matches time ordering.
pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(
    column: &str,
    value: String,
) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(&value).map(|timestamp| timestamp.with_timezone(&Utc)).map_err(
        |error| {
            RepositoryError::Decode(format!("invalid timestamp in `{column}`: `{value}` ({error})"))
        },
    )
}

pub(crate) fn parse_date(column: &str, value: String) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|error| {
        RepositoryError::Decode(format!("invalid date in `{column}`: `{value}` ({error})"))
    })
}

pub(crate) fn parse_decimal(column: &str, value: String) -> Result<Decimal, RepositoryError> {
    value.parse::<Decimal>().map_err(|error| {
        RepositoryError::Decode(format!("invalid decimal in `{column}`: `{value}` ({error})"))
    })
}

pub(crate) fn parse_enum<T>(column: &str, value: String) -> Result<T, RepositoryError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|error| RepositoryError::Decode(format!("invalid `{column}` value: {error}")))
}
