use std::cmp::Reverse;
use std::collections::HashMap;

use tokio::sync::RwLock;

use atelier_core::domain::booking::{Booking, BookingId, BookingStatus, Payment};
use atelier_core::domain::design::{DesignId, DesignRecord};
use atelier_core::domain::designer::{Designer, DesignerId};

use super::{BookingRepository, DesignRequestRepository, DesignerRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryDesignRequestRepository {
    designs: RwLock<HashMap<String, DesignRecord>>,
}

#[async_trait::async_trait]
impl DesignRequestRepository for InMemoryDesignRequestRepository {
    async fn save(&self, record: DesignRecord) -> Result<(), RepositoryError> {
        let mut designs = self.designs.write().await;
        designs.insert(record.id.0.clone(), record);
        Ok(())
    }

    async fn find_by_id(&self, id: &DesignId) -> Result<Option<DesignRecord>, RepositoryError> {
        let designs = self.designs.read().await;
        Ok(designs.get(&id.0).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<DesignRecord>, RepositoryError> {
        let designs = self.designs.read().await;
        let mut listed: Vec<DesignRecord> =
            designs.values().filter(|record| record.user_id == user_id).cloned().collect();
        listed.sort_by(|a, b| (b.created_at, &b.id.0).cmp(&(a.created_at, &a.id.0)));
        Ok(listed)
    }
}

#[derive(Default)]
pub struct InMemoryDesignerRepository {
    designers: RwLock<HashMap<String, Designer>>,
}

#[async_trait::async_trait]
impl DesignerRepository for InMemoryDesignerRepository {
    async fn save(&self, designer: Designer) -> Result<(), RepositoryError> {
        let mut designers = self.designers.write().await;
        designers.insert(designer.id.0.clone(), designer);
        Ok(())
    }

    async fn find_by_id(&self, id: &DesignerId) -> Result<Option<Designer>, RepositoryError> {
        let designers = self.designers.read().await;
        Ok(designers.get(&id.0).cloned())
    }

    async fn list(&self) -> Result<Vec<Designer>, RepositoryError> {
        let designers = self.designers.read().await;
        let mut listed: Vec<Designer> = designers.values().cloned().collect();
        listed.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
        Ok(listed)
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<String, Booking>>,
    payments: RwLock<HashMap<String, Payment>>,
}

impl InMemoryBookingRepository {
    async fn sorted(&self, user_id: Option<&str>) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        let mut listed: Vec<Booking> = bookings
            .values()
            .filter(|booking| user_id.map_or(true, |user_id| booking.user_id == user_id))
            .cloned()
            .collect();
        listed.sort_by_key(|booking| Reverse((booking.created_at, booking.id.0.clone())));
        listed
    }
}

#[async_trait::async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: Booking, payment: Payment) -> Result<(), RepositoryError> {
        let mut bookings = self.bookings.write().await;
        let mut payments = self.payments.write().await;
        payments.insert(payment.booking_id.0.clone(), payment);
        bookings.insert(booking.id.0.clone(), booking);
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id.0).cloned())
    }

    async fn find_payment(
        &self,
        booking_id: &BookingId,
    ) -> Result<Option<Payment>, RepositoryError> {
        let payments = self.payments.read().await;
        Ok(payments.get(&booking_id.0).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self.sorted(Some(user_id)).await)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self.sorted(None).await)
    }

    async fn update_status(
        &self,
        id: &BookingId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get_mut(&id.0) {
            Some(booking) if booking.status == from => {
                booking.status = to;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    use atelier_core::domain::booking::{Booking, BookingStatus, NewBooking};
    use atelier_core::domain::design::DesignRecord;
    use atelier_core::domain::designer::{Availability, Designer, DesignerId};
    use atelier_core::recommendation::DesignRequest;

    use crate::repositories::{
        BookingRepository, DesignRequestRepository, DesignerRepository,
        InMemoryBookingRepository, InMemoryDesignRequestRepository, InMemoryDesignerRepository,
    };

    #[tokio::test]
    async fn in_memory_design_repo_lists_newest_first() {
        let repo = InMemoryDesignRequestRepository::default();
        let request = DesignRequest::new(
            "Kitchen",
            "Small (< 100 sq ft)",
            "Under ₹50,000 / $600",
            "Mediterranean",
            "Rustic",
            "Couple",
        );
        let now = Utc::now();
        let older = DesignRecord::new("user-1", request.clone(), now - Duration::hours(1))
            .expect("record");
        let newer = DesignRecord::new("user-1", request.clone(), now).expect("record");
        let foreign = DesignRecord::new("user-2", request, now).expect("record");

        for record in [older.clone(), newer.clone(), foreign] {
            repo.save(record).await.expect("save design");
        }

        assert_eq!(repo.find_by_id(&older.id).await.expect("find"), Some(older.clone()));
        assert_eq!(repo.list_for_user("user-1").await.expect("list"), vec![newer, older]);
    }

    #[tokio::test]
    async fn in_memory_designer_repo_orders_by_rating() {
        let repo = InMemoryDesignerRepository::default();
        for (id, rating) in [("designer-low", 44), ("designer-high", 49)] {
            repo.save(Designer {
                id: DesignerId(id.to_string()),
                name: id.to_string(),
                specialization: "Industrial & Rustic".to_string(),
                experience: "10 Years".to_string(),
                rating: Decimal::new(rating, 1),
                hourly_rate: Decimal::new(130, 0),
                availability: Availability::Busy,
                image_url: None,
            })
            .await
            .expect("save designer");
        }

        let ids: Vec<String> =
            repo.list().await.expect("list").into_iter().map(|designer| designer.id.0).collect();
        assert_eq!(ids, vec!["designer-high", "designer-low"]);
    }

    #[tokio::test]
    async fn in_memory_booking_repo_round_trip() {
        let repo = InMemoryBookingRepository::default();
        let request = NewBooking {
            user_id: "user-1".to_string(),
            designer_id: None,
            design_id: None,
            booking_date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
            time_slot: "11:00 AM – 01:00 PM".to_string(),
            service_type: "Quick Design Review (1hr)".to_string(),
            amount: Some(Decimal::new(95, 0)),
        };
        let (booking, payment) =
            Booking::place(request, None, Utc::now(), &mut StdRng::seed_from_u64(5))
                .expect("booking");

        repo.create(booking.clone(), payment.clone()).await.expect("create");
        assert_eq!(repo.find_payment(&booking.id).await.expect("payment"), Some(payment));
        assert!(repo
            .update_status(&booking.id, BookingStatus::Confirmed, BookingStatus::Completed)
            .await
            .expect("update"));

        let all = repo.list_all().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn in_memory_booking_repo_rejects_a_stale_status() {
        let repo = InMemoryBookingRepository::default();
        let request = NewBooking {
            user_id: "user-1".to_string(),
            designer_id: None,
            design_id: None,
            booking_date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
            time_slot: "02:00 PM – 04:00 PM".to_string(),
            service_type: "Quick Design Review (1hr)".to_string(),
            amount: Some(Decimal::new(95, 0)),
        };
        let (booking, payment) =
            Booking::place(request, None, Utc::now(), &mut StdRng::seed_from_u64(6))
                .expect("booking");
        repo.create(booking.clone(), payment).await.expect("create");

        let cancelled = repo
            .update_status(&booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
            .await
            .expect("cancel");
        let completed = repo
            .update_status(&booking.id, BookingStatus::Confirmed, BookingStatus::Completed)
            .await
            .expect("complete");

        assert!(cancelled);
        assert!(!completed);
        let stored = repo.find_by_id(&booking.id).await.expect("find").expect("present");
        assert_eq!(stored.status, BookingStatus::Cancelled);
    }
}
