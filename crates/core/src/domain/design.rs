use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;
use crate::recommendation::DesignRequest;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignId(pub String);

impl DesignId {
    pub fn generate() -> Self {
        Self(format!("design-{}", Uuid::new_v4().simple()))
    }
}

/// Stored design requests are only ever `pending`; the recommendation is
/// regenerated from the request whenever it is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    Pending,
}

impl DesignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl std::str::FromStr for DesignStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            other => {
                Err(DomainError::InvariantViolation(format!("unknown design status `{other}`")))
            }
        }
    }
}

/// A client's saved design request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub id: DesignId,
    pub user_id: String,
    pub request: DesignRequest,
    pub status: DesignStatus,
    pub created_at: DateTime<Utc>,
}

impl DesignRecord {
    pub fn new(
        user_id: impl Into<String>,
        request: DesignRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "design request requires a user id".to_string(),
            ));
        }

        Ok(Self {
            id: DesignId::generate(),
            user_id,
            request,
            status: DesignStatus::Pending,
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{DesignRecord, DesignStatus};
    use crate::errors::DomainError;
    use crate::recommendation::DesignRequest;

    fn request() -> DesignRequest {
        DesignRequest::new(
            "Bedroom",
            "Small (< 100 sq ft)",
            "Under ₹50,000 / $600",
            "Soft Pastels",
            "Scandinavian",
            "Couple",
        )
    }

    #[test]
    fn new_records_start_pending_with_fresh_ids() {
        let a = DesignRecord::new("user-1", request(), Utc::now()).expect("record");
        let b = DesignRecord::new("user-1", request(), Utc::now()).expect("record");
        assert_eq!(a.status, DesignStatus::Pending);
        assert!(a.id.0.starts_with("design-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn blank_user_is_rejected() {
        let error = DesignRecord::new("  ", request(), Utc::now()).expect_err("blank user");
        assert!(matches!(error, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn status_round_trips_through_its_column_value() {
        let parsed: DesignStatus = DesignStatus::Pending.as_str().parse().expect("parse");
        assert_eq!(parsed, DesignStatus::Pending);
        assert!("archived".parse::<DesignStatus>().is_err());
    }
}
