pub mod config;
pub mod domain;
pub mod errors;
pub mod knowledge;
pub mod recommendation;

pub use domain::booking::{
    Booking, BookingId, BookingStatus, NewBooking, Payment, PaymentId, PaymentStatus,
    TransactionId,
};
pub use domain::design::{DesignId, DesignRecord, DesignStatus};
pub use domain::designer::{Availability, Designer, DesignerId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommendation::{
    generate, DesignRequest, Fallback, KnowledgeLookup, RecommendationBundle, RecommendationEngine,
};
