use std::time::Instant;

use atelier_db::{ping, DbPool};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    Degraded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatabaseProbe {
    pub status: Readiness,
    pub latency_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: Readiness,
    pub version: &'static str,
    pub database: DatabaseProbe,
    pub checked_at: String,
}

pub fn router(db_pool: DbPool) -> Router {
    Router::new().route("/health", get(health)).with_state(db_pool)
}

/// 200 while the database answers, 503 otherwise.
pub async fn health(State(db_pool): State<DbPool>) -> (StatusCode, Json<HealthReport>) {
    let database = probe_database(&db_pool).await;
    let status = database.status;
    let status_code = match status {
        Readiness::Ready => StatusCode::OK,
        Readiness::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        checked_at: Utc::now().to_rfc3339(),
    };
    (status_code, Json(report))
}

async fn probe_database(pool: &DbPool) -> DatabaseProbe {
    let started = Instant::now();
    let outcome = ping(pool).await;
    let latency_ms = started.elapsed().as_millis();

    match outcome {
        Ok(()) => DatabaseProbe { status: Readiness::Ready, latency_ms, error: None },
        Err(error) => {
            warn!(
                event_name = "system.health.database_degraded",
                error = %error,
                "health probe could not reach the database"
            );
            DatabaseProbe {
                status: Readiness::Degraded,
                latency_ms,
                error: Some(error.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use atelier_db::connect_with_settings;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn reachable_database_reports_ready() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");

        let (status, Json(report)) = health(State(pool.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(report.status, Readiness::Ready);
        assert_eq!(report.database.error, None);
        pool.close().await;
    }

    #[tokio::test]
    async fn closed_pool_reports_degraded() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        pool.close().await;

        let (status, Json(report)) = health(State(pool)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(report.status, Readiness::Degraded);
        assert!(report.database.error.is_some());
    }

    #[tokio::test]
    async fn route_serves_snake_case_json() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        let request = Request::builder().uri("/health").body(Body::empty()).expect("request");

        let response = router(pool).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"]["status"], "ready");
    }
}
