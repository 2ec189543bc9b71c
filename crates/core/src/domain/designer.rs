use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::booking::service_hours;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignerId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
        }
    }
}

impl std::str::FromStr for Availability {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            other => {
                Err(DomainError::InvariantViolation(format!("unknown availability `{other}`")))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designer {
    pub id: DesignerId,
    pub name: String,
    pub specialization: String,
    pub experience: String,
    pub rating: Decimal,
    pub hourly_rate: Decimal,
    pub availability: Availability,
    pub image_url: Option<String>,
}

impl Designer {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Price of a service at this designer's hourly rate.
    pub fn quote(&self, service_type: &str) -> Decimal {
        self.hourly_rate * Decimal::from(service_hours(service_type))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Availability, Designer, DesignerId};

    fn designer(availability: Availability) -> Designer {
        Designer {
            id: DesignerId("designer-priya-sharma".to_string()),
            name: "Priya Sharma".to_string(),
            specialization: "Minimalist & Zen".to_string(),
            experience: "6 Years".to_string(),
            rating: Decimal::new(47, 1),
            hourly_rate: Decimal::new(100, 0),
            availability,
            image_url: None,
        }
    }

    #[test]
    fn quote_multiplies_rate_by_service_hours() {
        let designer = designer(Availability::Available);
        assert_eq!(designer.quote("3D Visualisation Package (4hrs)"), Decimal::new(400, 0));
        assert_eq!(designer.quote("Quick Design Review (1hr)"), Decimal::new(100, 0));
        assert_eq!(designer.quote("Bespoke service"), Decimal::new(200, 0));
    }

    #[test]
    fn availability_parses_case_insensitively() {
        assert_eq!("Busy".parse::<Availability>().expect("parse"), Availability::Busy);
        assert!(!designer(Availability::Busy).is_available());
        assert!("on leave".parse::<Availability>().is_err());
    }
}
