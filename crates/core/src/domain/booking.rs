use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::design::DesignId;
use crate::domain::designer::{Designer, DesignerId};
use crate::errors::DomainError;

/// Name recorded on bookings made without a known designer.
pub const UNASSIGNED_DESIGNER: &str = "TBD";

pub const CARD_PAYMENT_METHOD: &str = "Card";

const TRANSACTION_ID_LEN: usize = 10;
const TRANSACTION_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Appointment windows offered to clients.
pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM – 11:00 AM",
    "11:00 AM – 01:00 PM",
    "02:00 PM – 04:00 PM",
    "04:00 PM – 06:00 PM",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceOffering {
    pub name: &'static str,
    pub hours: u32,
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering { name: "Full Room Consultation (2hrs)", hours: 2 },
    ServiceOffering { name: "Quick Design Review (1hr)", hours: 1 },
    ServiceOffering { name: "3D Visualisation Package (4hrs)", hours: 4 },
    ServiceOffering { name: "Shopping Assistance (3hrs)", hours: 3 },
    ServiceOffering { name: "Full Project Management (8hrs)", hours: 8 },
];

/// Billable hours for unlisted services.
pub const DEFAULT_SERVICE_HOURS: u32 = 2;

pub fn service_hours(service_type: &str) -> u32 {
    SERVICES
        .iter()
        .find(|service| service.name == service_type)
        .map_or(DEFAULT_SERVICE_HOURS, |service| service.hours)
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn generate() -> Self {
        Self(format!("booking-{}", Uuid::new_v4().simple()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub String);

impl PaymentId {
    pub fn generate() -> Self {
        Self(format!("payment-{}", Uuid::new_v4().simple()))
    }
}

/// Ten upper-case alphanumeric characters, e.g. `Q7Z0K2M9XA`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..TRANSACTION_ID_LEN)
            .map(|_| {
                let index = rng.gen_range(0..TRANSACTION_ID_ALPHABET.len());
                char::from(TRANSACTION_ID_ALPHABET[index])
            })
            .collect();
        Self(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown booking status `{other}` (expected confirmed|completed|cancelled)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed" => Ok(Self::Completed),
            other => {
                Err(DomainError::InvariantViolation(format!("unknown payment status `{other}`")))
            }
        }
    }
}

/// What a client submits when booking a designer.
///
/// `amount` may be omitted when a designer is given; it is then priced from
/// the designer's hourly rate and the service's hours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_id: String,
    #[serde(default)]
    pub designer_id: Option<DesignerId>,
    #[serde(default)]
    pub design_id: Option<DesignId>,
    pub booking_date: NaiveDate,
    pub time_slot: String,
    pub service_type: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: String,
    pub design_id: Option<DesignId>,
    pub designer_id: Option<DesignerId>,
    pub designer_name: String,
    pub booking_date: NaiveDate,
    pub time_slot: String,
    pub service_type: String,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub booking_id: BookingId,
    pub user_id: String,
    pub amount: Decimal,
    pub method: String,
    pub transaction_id: TransactionId,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Confirms a booking and the card payment that settles it.
    ///
    /// `designer` is the record `request.designer_id` resolved to, if any.
    pub fn place<R: Rng + ?Sized>(
        request: NewBooking,
        designer: Option<&Designer>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(Booking, Payment), DomainError> {
        if request.user_id.trim().is_empty() {
            return Err(DomainError::InvariantViolation("booking requires a user id".to_string()));
        }

        let amount = match (request.amount, designer) {
            (Some(amount), _) => amount,
            (None, Some(designer)) => designer.quote(&request.service_type),
            (None, None) => {
                return Err(DomainError::InvariantViolation(
                    "booking amount is required when no designer is assigned".to_string(),
                ))
            }
        };
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvariantViolation(
                "booking amount must be positive".to_string(),
            ));
        }

        let booking = Booking {
            id: BookingId::generate(),
            user_id: request.user_id,
            design_id: request.design_id,
            designer_id: designer.map(|designer| designer.id.clone()),
            designer_name: designer
                .map_or_else(|| UNASSIGNED_DESIGNER.to_string(), |designer| designer.name.clone()),
            booking_date: request.booking_date,
            time_slot: request.time_slot,
            service_type: request.service_type,
            amount,
            payment_status: PaymentStatus::Completed,
            status: BookingStatus::Confirmed,
            created_at: now,
        };
        let payment = Payment {
            id: PaymentId::generate(),
            booking_id: booking.id.clone(),
            user_id: booking.user_id.clone(),
            amount,
            method: CARD_PAYMENT_METHOD.to_string(),
            transaction_id: TransactionId::generate(rng),
            status: PaymentStatus::Completed,
            created_at: now,
        };

        Ok((booking, payment))
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self.status, next),
            (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn transition_to(&mut self, next: BookingStatus) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        Err(DomainError::InvalidBookingTransition { from: self.status, to: next })
    }
}
