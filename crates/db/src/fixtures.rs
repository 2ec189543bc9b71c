use rust_decimal::Decimal;

use atelier_core::domain::designer::{Availability, Designer, DesignerId};

use crate::connection::DbPool;
use crate::repositories::RepositoryError;

/// Studio designers available for booking out of the box.
const ROSTER: &[DesignerSeed] = &[
    DesignerSeed {
        id: "designer-sophia-williams",
        name: "Sophia Williams",
        specialization: "Modern & Contemporary",
        experience: "8 Years",
        rating_tenths: 49,
        hourly_rate: 120,
        availability: Availability::Available,
        image_url: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    DesignerSeed {
        id: "designer-james-carter",
        name: "James Carter",
        specialization: "Traditional & Classic",
        experience: "12 Years",
        rating_tenths: 48,
        hourly_rate: 150,
        availability: Availability::Available,
        image_url: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    DesignerSeed {
        id: "designer-priya-sharma",
        name: "Priya Sharma",
        specialization: "Minimalist & Zen",
        experience: "6 Years",
        rating_tenths: 47,
        hourly_rate: 100,
        availability: Availability::Available,
        image_url: "https://randomuser.me/api/portraits/women/68.jpg",
    },
    DesignerSeed {
        id: "designer-michael-torres",
        name: "Michael Torres",
        specialization: "Industrial & Rustic",
        experience: "10 Years",
        rating_tenths: 46,
        hourly_rate: 130,
        availability: Availability::Busy,
        image_url: "https://randomuser.me/api/portraits/men/75.jpg",
    },
    DesignerSeed {
        id: "designer-emma-chen",
        name: "Emma Chen",
        specialization: "Bohemian & Eclectic",
        experience: "5 Years",
        rating_tenths: 48,
        hourly_rate: 110,
        availability: Availability::Available,
        image_url: "https://randomuser.me/api/portraits/women/90.jpg",
    },
];

/// Seeds and verifies the designer roster.
///
/// Loading is idempotent: designers that already exist keep their stored
/// values, so availability changes made after seeding survive a re-seed.
pub struct DesignerRoster;

impl DesignerRoster {
    pub fn designers() -> Vec<Designer> {
        ROSTER.iter().map(DesignerSeed::to_designer).collect()
    }

    pub async fn load(pool: &DbPool) -> Result<SeedResult, RepositoryError> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for designer in Self::designers() {
            let result = sqlx::query(
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
                 ON CONFLICT(id) DO NOTHING",
            )
            .bind(&designer.id.0)
            .bind(&designer.name)
            .bind(&designer.specialization)
            .bind(&designer.experience)
            .bind(designer.rating.to_string())
            .bind(designer.hourly_rate.to_string())
            .bind(designer.availability.as_str())
            .bind(designer.image_url.as_deref())
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;

        Ok(SeedResult {
            designers_seeded: ROSTER.iter().map(|seed| seed.id).collect(),
            newly_inserted: inserted,
        })
    }

    pub async fn verify(pool: &DbPool) -> Result<VerificationResult, RepositoryError> {
        let mut checks = Vec::with_capacity(ROSTER.len());

        for seed in ROSTER {
            let present: i64 = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM designer WHERE id = ?1 AND name = ?2)",
            )
            .bind(seed.id)
            .bind(seed.name)
            .fetch_one(pool)
            .await?;
            checks.push((seed.id, present == 1));
        }

        Ok(VerificationResult { all_present: checks.iter().all(|(_, ok)| *ok), checks })
    }
}

#[derive(Debug, Clone, Copy)]
struct DesignerSeed {
    id: &'static str,
    name: &'static str,
    specialization: &'static str,
    experience: &'static str,
    rating_tenths: i64,
    hourly_rate: i64,
    availability: Availability,
    image_url: &'static str,
}

impl DesignerSeed {
    fn to_designer(&self) -> Designer {
        Designer {
            id: DesignerId(self.id.to_string()),
            name: self.name.to_string(),
            specialization: self.specialization.to_string(),
            experience: self.experience.to_string(),
            rating: Decimal::new(self.rating_tenths, 1),
            hourly_rate: Decimal::new(self.hourly_rate, 0),
            availability: self.availability,
            image_url: Some(self.image_url.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct SeedResult {
    pub designers_seeded: Vec<&'static str>,
    pub newly_inserted: u64,
}

#[derive(Debug)]
pub struct VerificationResult {
    pub all_present: bool,
    pub checks: Vec<(&'static str, bool)>,
}
