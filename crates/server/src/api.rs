//! JSON API for recommendations, design requests, designers and bookings.
//!
//! - `GET  /api/v1/options`                 curated inputs, services and time slots
//! - `POST /api/v1/recommendations`         recommendation bundle for a request
//! - `POST /api/v1/designs`                 save a design request and recommend for it
//! - `GET  /api/v1/designs?user_id=`        a client's design requests, newest first
//! - `GET  /api/v1/designs/{id}`            one design request with a regenerated bundle
//! - `GET  /api/v1/designers`               designers, highest rated first
//! - `POST /api/v1/bookings`                book a designer and record the card payment
//! - `GET  /api/v1/bookings?user_id=`       a client's bookings, newest first
//! - `POST /api/v1/bookings/{id}/status`    complete or cancel a confirmed booking
//! - `GET  /api/v1/admin/stats`             clients, designs, bookings, revenue, styles
//! - `GET  /api/v1/admin/bookings`          every booking, newest first

use std::sync::Arc;

use atelier_core::domain::booking::{Booking, BookingId, BookingStatus, NewBooking};
use atelier_core::domain::design::{DesignId, DesignRecord};
use atelier_core::domain::designer::Designer;
use atelier_core::errors::{ApplicationError, DomainError, InterfaceError};
use atelier_core::knowledge::{catalog, Catalog};
use atelier_core::recommendation::{DesignRequest, RecommendationBundle, RecommendationEngine};
use atelier_db::repositories::{
    AdminStats, BookingRepository, DesignRequestRepository, DesignerRepository, RepositoryError,
    SqlBookingRepository, SqlDesignRequestRepository, SqlDesignerRepository, SqlStatsRepository,
    StatsRepository,
};
use atelier_db::DbPool;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    engine: RecommendationEngine,
    designs: Arc<dyn DesignRequestRepository>,
    designers: Arc<dyn DesignerRepository>,
    bookings: Arc<dyn BookingRepository>,
    stats: Arc<dyn StatsRepository>,
}

impl ApiState {
    /// SQLite-backed repositories sharing one pool.
    pub fn sql(pool: DbPool, engine: RecommendationEngine) -> Self {
        Self {
            engine,
            designs: Arc::new(SqlDesignRequestRepository::new(pool.clone())),
            designers: Arc::new(SqlDesignerRepository::new(pool.clone())),
            bookings: Arc::new(SqlBookingRepository::new(pool.clone())),
            stats: Arc::new(SqlStatsRepository::new(pool)),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateDesignRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub request: DesignRequest,
}

#[derive(Debug, Serialize)]
pub struct DesignResponse {
    #[serde(flatten)]
    pub record: DesignRecord,
    pub recommendation: RecommendationBundle,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub transaction_id: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub correlation_id: String,
}

type ApiFailure = (StatusCode, Json<ApiError>);

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/options", get(options))
        .route("/api/v1/recommendations", post(recommend))
        .route("/api/v1/designs", get(list_designs).post(create_design))
        .route("/api/v1/designs/{id}", get(get_design))
        .route("/api/v1/designers", get(list_designers))
        .route("/api/v1/bookings", get(list_bookings).post(create_booking))
        .route("/api/v1/bookings/{id}/status", post(update_booking_status))
        .route("/api/v1/admin/stats", get(admin_stats))
        .route("/api/v1/admin/bookings", get(admin_bookings))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn options() -> Json<Catalog> {
    Json(catalog())
}

async fn recommend(
    State(state): State<ApiState>,
    Json(request): Json<DesignRequest>,
) -> Json<RecommendationBundle> {
    Json(state.engine.recommend(&request))
}

async fn create_design(
    State(state): State<ApiState>,
    Json(body): Json<CreateDesignRequest>,
) -> Result<(StatusCode, Json<DesignResponse>), ApiFailure> {
    let correlation_id = correlation_id();
    let record = DesignRecord::new(body.user_id, body.request, Utc::now())
        .map_err(|error| fail(error.into(), &correlation_id))?;
    let recommendation = state.engine.recommend(&record.request);

    state.designs.save(record.clone()).await.map_err(storage(&correlation_id))?;

    info!(
        event_name = "design.request.saved",
        correlation_id = %correlation_id,
        design_id = %record.id.0,
        user_id = %record.user_id,
        furniture_style = %record.request.furniture_style,
        "design request saved"
    );

    Ok((StatusCode::CREATED, Json(DesignResponse { record, recommendation })))
}

async fn list_designs(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<DesignRecord>>, ApiFailure> {
    let correlation_id = correlation_id();
    let records =
        state.designs.list_for_user(&query.user_id).await.map_err(storage(&correlation_id))?;
    Ok(Json(records))
}

async fn get_design(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<DesignResponse>, ApiFailure> {
    let correlation_id = correlation_id();
    let record = state
        .designs
        .find_by_id(&DesignId(id.clone()))
        .await
        .map_err(storage(&correlation_id))?
        .ok_or_else(|| {
            fail(ApplicationError::NotFound { entity: "design request", id }, &correlation_id)
        })?;

    let recommendation = state.engine.recommend(&record.request);
    Ok(Json(DesignResponse { record, recommendation }))
}

async fn list_designers(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Designer>>, ApiFailure> {
    let correlation_id = correlation_id();
    let designers = state.designers.list().await.map_err(storage(&correlation_id))?;
    Ok(Json(designers))
}

async fn create_booking(
    State(state): State<ApiState>,
    Json(request): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiFailure> {
    let correlation_id = correlation_id();

    if let Some(design_id) = &request.design_id {
        let design =
            state.designs.find_by_id(design_id).await.map_err(storage(&correlation_id))?;
        if design.is_none() {
            return Err(fail(
                ApplicationError::NotFound { entity: "design request", id: design_id.0.clone() },
                &correlation_id,
            ));
        }
    }

    let designer = match &request.designer_id {
        Some(designer_id) => {
            let found =
                state.designers.find_by_id(designer_id).await.map_err(storage(&correlation_id))?;
            if found.is_none() {
                warn!(
                    event_name = "booking.designer_unknown",
                    correlation_id = %correlation_id,
                    designer_id = %designer_id.0,
                    "booking names an unknown designer; recording it as unassigned"
                );
            }
            found
        }
        None => None,
    };

    let (booking, payment) =
        Booking::place(request, designer.as_ref(), Utc::now(), &mut rand::thread_rng())
            .map_err(|error| fail(error.into(), &correlation_id))?;
    let transaction_id = payment.transaction_id.0.clone();

    state.bookings.create(booking.clone(), payment).await.map_err(storage(&correlation_id))?;

    info!(
        event_name = "booking.created",
        correlation_id = %correlation_id,
        booking_id = %booking.id.0,
        user_id = %booking.user_id,
        designer_name = %booking.designer_name,
        amount = %booking.amount,
        "booking confirmed and payment recorded"
    );

    Ok((StatusCode::CREATED, Json(BookingResponse { booking, transaction_id })))
}

async fn list_bookings(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Booking>>, ApiFailure> {
    let correlation_id = correlation_id();
    let bookings =
        state.bookings.list_for_user(&query.user_id).await.map_err(storage(&correlation_id))?;
    Ok(Json(bookings))
}

async fn update_booking_status(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Booking>, ApiFailure> {
    let correlation_id = correlation_id();
    let id = BookingId(id);
    let not_found = |id: &BookingId| {
        fail(ApplicationError::NotFound { entity: "booking", id: id.0.clone() }, &correlation_id)
    };

    let mut booking = state
        .bookings
        .find_by_id(&id)
        .await
        .map_err(storage(&correlation_id))?
        .ok_or_else(|| not_found(&id))?;
    let previous = booking.status;
    booking.transition_to(update.status).map_err(|error| fail(error.into(), &correlation_id))?;

    let updated = state
        .bookings
        .update_status(&booking.id, previous, booking.status)
        .await
        .map_err(storage(&correlation_id))?;
    if !updated {
        // Another request moved the booking after it was read.
        let current = state
            .bookings
            .find_by_id(&id)
            .await
            .map_err(storage(&correlation_id))?
            .ok_or_else(|| not_found(&id))?;
        let conflict =
            DomainError::InvalidBookingTransition { from: current.status, to: update.status };
        return Err(fail(conflict.into(), &correlation_id));
    }

    info!(
        event_name = "booking.status_changed",
        correlation_id = %correlation_id,
        booking_id = %booking.id.0,
        from = previous.as_str(),
        to = booking.status.as_str(),
        "booking status updated"
    );

    Ok(Json(booking))
}

async fn admin_stats(State(state): State<ApiState>) -> Result<Json<AdminStats>, ApiFailure> {
    let correlation_id = correlation_id();
    let stats = state.stats.admin_stats().await.map_err(storage(&correlation_id))?;
    Ok(Json(stats))
}

async fn admin_bookings(State(state): State<ApiState>) -> Result<Json<Vec<Booking>>, ApiFailure> {
    let correlation_id = correlation_id();
    let bookings = state.bookings.list_all().await.map_err(storage(&correlation_id))?;
    Ok(Json(bookings))
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn correlation_id() -> String {
    format!("req-{}", Uuid::new_v4().simple())
}

fn fail(error: ApplicationError, correlation_id: &str) -> ApiFailure {
    reject(error.into_interface(correlation_id))
}

fn storage(correlation_id: &str) -> impl FnOnce(RepositoryError) -> ApiFailure + '_ {
    move |error| {
        error!(
            event_name = "api.persistence_error",
            correlation_id = %correlation_id,
            error = %error,
            "repository call failed"
        );
        fail(ApplicationError::Persistence(error.to_string()), correlation_id)
    }
}

/// Storage and internal details stay in the logs; clients get the user-safe message.
fn reject(error: InterfaceError) -> ApiFailure {
    let (status, detail) = match &error {
        InterfaceError::BadRequest { message, .. } => {
            (StatusCode::BAD_REQUEST, Some(message.clone()))
        }
        InterfaceError::NotFound { message, .. } => (StatusCode::NOT_FOUND, Some(message.clone())),
        InterfaceError::ServiceUnavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, None),
        InterfaceError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, None),
    };

    (
        status,
        Json(ApiError {
            error: error.user_message().to_string(),
            detail,
            correlation_id: error.correlation_id().to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use atelier_core::domain::booking::Payment;
    use atelier_core::recommendation::RecommendationEngine;
    use atelier_db::repositories::{
        InMemoryBookingRepository, InMemoryDesignRequestRepository, InMemoryDesignerRepository,
    };
    use atelier_db::{connect_with_settings, migrations, DesignerRoster};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn app() -> Router {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        migrations::run_pending(&pool).await.expect("migrations");
        DesignerRoster::load(&pool).await.expect("seed designers");
        router(ApiState::sql(pool, RecommendationEngine::with_seed(7)))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn design_request() -> Value {
        json!({
            "room_type": "Bedroom",
            "room_size": "Medium (100–250 sq ft)",
            "budget": "₹50,000–₹1,50,000 / $600–$1,800",
            "color_theme": "Cool & Calm",
            "furniture_style": "Scandinavian",
            "lifestyle": "Work From Home"
        })
    }

    fn decimal(value: &Value) -> Decimal {
        Decimal::from_str(value.as_str().expect("decimal as string")).expect("decimal")
    }

    #[tokio::test]
    async fn recommendations_are_reproducible_with_a_seeded_engine() {
        let app = app().await;

        let uri = "/api/v1/recommendations";
        let (status, first) = send(&app, "POST", uri, Some(design_request())).await;
        let (_, second) = send(&app, "POST", uri, Some(design_request())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first["palette_name"], "Cool Blues");
        assert_eq!(first["concepts"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn saved_designs_are_listed_and_fetched_with_their_bundle() {
        let app = app().await;
        let mut body = design_request();
        body["user_id"] = json!("client-ana");
        body["special_notes"] = json!("Needs a reading nook");

        let (status, created) = send(&app, "POST", "/api/v1/designs", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "pending");
        assert_eq!(created["request"]["special_notes"], "Needs a reading nook");
        let id = created["id"].as_str().expect("design id").to_string();

        let (status, listed) = send(&app, "GET", "/api/v1/designs?user_id=client-ana", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(listed[0]["id"], id.as_str());

        let (status, fetched) = send(&app, "GET", &format!("/api/v1/designs/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["recommendation"], created["recommendation"]);

        let (_, others) = send(&app, "GET", "/api/v1/designs?user_id=client-ben", None).await;
        assert_eq!(others, json!([]));
    }

    #[tokio::test]
    async fn unknown_design_is_not_found() {
        let app = app().await;

        let (status, error) = send(&app, "GET", "/api/v1/designs/design-missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["error"], "The requested record does not exist.");
        assert_eq!(error["detail"], "design request `design-missing` was not found");
        assert!(error["correlation_id"].as_str().is_some_and(|id| id.starts_with("req-")));
    }

    #[tokio::test]
    async fn designers_are_listed_by_rating() {
        let app = app().await;

        let (status, designers) = send(&app, "GET", "/api/v1/designers", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(designers.as_array().map(Vec::len), Some(5));
        assert_eq!(designers[0]["name"], "Sophia Williams");
        assert_eq!(designers[4]["name"], "Michael Torres");
    }

    #[tokio::test]
    async fn booking_a_designer_prices_the_service_and_feeds_admin_stats() {
        let app = app().await;
        let mut design = design_request();
        design["user_id"] = json!("client-ana");
        let (_, created) = send(&app, "POST", "/api/v1/designs", Some(design)).await;

        let (status, booking) = send(
            &app,
            "POST",
            "/api/v1/bookings",
            Some(json!({
                "user_id": "client-ana",
                "designer_id": "designer-priya-sharma",
                "design_id": created["id"],
                "booking_date": "2026-11-02",
                "time_slot": "11:00 AM – 01:00 PM",
                "service_type": "3D Visualisation Package (4hrs)"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(booking["designer_name"], "Priya Sharma");
        assert_eq!(booking["status"], "confirmed");
        assert_eq!(booking["payment_status"], "completed");
        assert_eq!(decimal(&booking["amount"]), Decimal::new(400, 0));
        let transaction_id = booking["transaction_id"].as_str().expect("transaction id");
        assert_eq!(transaction_id.len(), 10);
        assert!(transaction_id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let (_, mine) = send(&app, "GET", "/api/v1/bookings?user_id=client-ana", None).await;
        assert_eq!(mine.as_array().map(Vec::len), Some(1));

        let (status, stats) = send(&app, "GET", "/api/v1/admin/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["clients"], 1);
        assert_eq!(stats["designs"], 1);
        assert_eq!(stats["bookings"], 1);
        assert_eq!(decimal(&stats["revenue"]), Decimal::new(400, 0));
        assert_eq!(stats["popular_styles"][0]["style"], "Scandinavian");

        let (_, all) = send(&app, "GET", "/api/v1/admin/bookings", None).await;
        assert_eq!(all.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn unknown_designer_books_as_unassigned_with_an_explicit_amount() {
        let app = app().await;

        let (status, booking) = send(
            &app,
            "POST",
            "/api/v1/bookings",
            Some(json!({
                "user_id": "client-ben",
                "designer_id": "designer-nobody",
                "booking_date": "2026-11-03",
                "time_slot": "09:00 AM – 11:00 AM",
                "service_type": "Quick Design Review (1hr)",
                "amount": "75.50"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(booking["designer_name"], "TBD");
        assert_eq!(booking["designer_id"], Value::Null);
        assert_eq!(decimal(&booking["amount"]), Decimal::new(7550, 2));
    }

    #[tokio::test]
    async fn booking_without_designer_or_amount_is_rejected() {
        let app = app().await;

        let (status, error) = send(
            &app,
            "POST",
            "/api/v1/bookings",
            Some(json!({
                "user_id": "client-ben",
                "booking_date": "2026-11-03",
                "time_slot": "09:00 AM – 11:00 AM",
                "service_type": "Quick Design Review (1hr)"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["detail"]
            .as_str()
            .is_some_and(|detail| detail.contains("amount is required when no designer")));
    }

    #[tokio::test]
    async fn booking_for_an_unknown_design_is_not_found() {
        let app = app().await;

        let (status, error) = send(
            &app,
            "POST",
            "/api/v1/bookings",
            Some(json!({
                "user_id": "client-ben",
                "designer_id": "designer-emma-chen",
                "design_id": "design-missing",
                "booking_date": "2026-11-03",
                "time_slot": "09:00 AM – 11:00 AM",
                "service_type": "Quick Design Review (1hr)"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["detail"], "design request `design-missing` was not found");
    }

    #[tokio::test]
    async fn booking_status_moves_once_out_of_confirmed() {
        let app = app().await;
        let (_, booking) = send(
            &app,
            "POST",
            "/api/v1/bookings",
            Some(json!({
                "user_id": "client-ana",
                "designer_id": "designer-emma-chen",
                "booking_date": "2026-11-04",
                "time_slot": "02:00 PM – 04:00 PM",
                "service_type": "Full Room Consultation (2hrs)"
            })),
        )
        .await;
        let uri = format!("/api/v1/bookings/{}/status", booking["id"].as_str().expect("id"));

        let (status, completed) =
            send(&app, "POST", &uri, Some(json!({ "status": "completed" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(completed["status"], "completed");

        let (status, error) =
            send(&app, "POST", &uri, Some(json!({ "status": "cancelled" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error["error"],
            "The request could not be processed. Check inputs and try again."
        );

        let (_, stored) = send(&app, "GET", "/api/v1/bookings?user_id=client-ana", None).await;
        assert_eq!(stored[0]["status"], "completed");
    }

    #[tokio::test]
    async fn status_update_for_unknown_booking_is_not_found() {
        let app = app().await;

        let (status, error) = send(
            &app,
            "POST",
            "/api/v1/bookings/booking-missing/status",
            Some(json!({ "status": "cancelled" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["detail"], "booking `booking-missing` was not found");
    }

    #[tokio::test]
    async fn options_list_services_and_slots() {
        let app = app().await;

        let (status, options) = send(&app, "GET", "/api/v1/options", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(options["services"].as_array().map(Vec::len), Some(5));
        assert_eq!(options["time_slots"][0], "09:00 AM – 11:00 AM");
        assert_eq!(options["room_types"].as_array().map(Vec::len), Some(6));
    }

    /// Lets a competing cancellation land between the handler's read and its write.
    struct CancelledMeanwhile(InMemoryBookingRepository);

    #[async_trait::async_trait]
    impl BookingRepository for CancelledMeanwhile {
        async fn create(&self, booking: Booking, payment: Payment) -> Result<(), RepositoryError> {
            self.0.create(booking, payment).await
        }

        async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
            self.0.find_by_id(id).await
        }

        async fn find_payment(
            &self,
            booking_id: &BookingId,
        ) -> Result<Option<Payment>, RepositoryError> {
            self.0.find_payment(booking_id).await
        }

        async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, RepositoryError> {
            self.0.list_for_user(user_id).await
        }

        async fn list_all(&self) -> Result<Vec<Booking>, RepositoryError> {
            self.0.list_all().await
        }

        async fn update_status(
            &self,
            id: &BookingId,
            from: BookingStatus,
            to: BookingStatus,
        ) -> Result<bool, RepositoryError> {
            self.0.update_status(id, BookingStatus::Confirmed, BookingStatus::Cancelled).await?;
            self.0.update_status(id, from, to).await
        }
    }

    #[tokio::test]
    async fn status_change_lost_to_a_concurrent_cancellation_is_rejected() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        let bookings = Arc::new(CancelledMeanwhile(InMemoryBookingRepository::default()));
        let request = NewBooking {
            user_id: "client-ana".to_string(),
            designer_id: None,
            design_id: None,
            booking_date: NaiveDate::from_ymd_opt(2026, 11, 5).expect("valid date"),
            time_slot: "04:00 PM – 06:00 PM".to_string(),
            service_type: "Shopping Assistance (3hrs)".to_string(),
            amount: Some(Decimal::new(300, 0)),
        };
        let (booking, payment) =
            Booking::place(request, None, Utc::now(), &mut StdRng::seed_from_u64(11))
                .expect("booking");
        bookings.create(booking.clone(), payment).await.expect("create");

        let app = router(ApiState {
            engine: RecommendationEngine::with_seed(7),
            designs: Arc::new(InMemoryDesignRequestRepository::default()),
            designers: Arc::new(InMemoryDesignerRepository::default()),
            bookings: bookings.clone(),
            stats: Arc::new(SqlStatsRepository::new(pool)),
        });
        let uri = format!("/api/v1/bookings/{}/status", booking.id.0);

        let (status, error) =
            send(&app, "POST", &uri, Some(json!({ "status": "completed" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["detail"], "invalid booking transition from Cancelled to Completed");
        let stored = bookings.find_by_id(&booking.id).await.expect("find").expect("present");
        assert_eq!(stored.status, BookingStatus::Cancelled);
    }
}
