use atelier_core::config::AppConfig;
use atelier_core::recommendation::RecommendationEngine;
use atelier_db::repositories::RepositoryError;
use atelier_db::{connect_with_config, migrations, DbPool, DesignerRoster};
use axum::Router;
use thiserror::Error;
use tracing::info;

use crate::api::{self, ApiState};
use crate::health;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
    #[error("designer roster seeding failed: {0}")]
    Seed(#[source] RepositoryError),
}

impl Application {
    /// API routes plus the health probe, sharing one pool.
    pub fn router(&self) -> Router {
        let engine = RecommendationEngine::from_seed(self.config.recommendation.seed);
        api::router(ApiState::sql(self.db_pool.clone(), engine))
            .merge(health::router(self.db_pool.clone()))
    }
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let db_pool =
        connect_with_config(&config.database).await.map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        correlation_id = "bootstrap",
        "database connection established"
    );

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(
        event_name = "system.bootstrap.migrations_applied",
        correlation_id = "bootstrap",
        "database migrations applied"
    );

    let seeded = DesignerRoster::load(&db_pool).await.map_err(BootstrapError::Seed)?;
    info!(
        event_name = "system.bootstrap.designers_seeded",
        correlation_id = "bootstrap",
        roster_size = seeded.designers_seeded.len(),
        newly_inserted = seeded.newly_inserted,
        "designer roster loaded"
    );

    Ok(Application { config, db_pool })
}

#[cfg(test)]
mod tests {
    use atelier_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use atelier_db::repositories::{DesignerRepository, SqlDesignerRepository};

    use crate::bootstrap::{bootstrap_with_config, BootstrapError};

    fn config_for(database_url: &str) -> AppConfig {
        AppConfig::load(LoadOptions {
            overrides: ConfigOverrides {
                database_url: Some(database_url.to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("config should load")
    }

    #[tokio::test]
    async fn bootstrap_reports_an_unopenable_database() {
        let result =
            bootstrap_with_config(config_for("sqlite:///atelier-missing-dir/nested/atelier.db"))
                .await;

        let error = result.err().expect("error");
        assert!(matches!(error, BootstrapError::DatabaseConnect(_)));
        assert!(error.to_string().starts_with("database connection failed"));
    }

    #[tokio::test]
    async fn bootstrap_migrates_and_seeds_the_designer_roster() {
        let app = bootstrap_with_config(config_for("sqlite::memory:"))
            .await
            .expect("bootstrap should succeed against an in-memory database");

        let (table_count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master \
             WHERE type = 'table' AND name IN ('design_request', 'designer', 'booking', 'payment')",
        )
        .fetch_one(&app.db_pool)
        .await
        .expect("schema query");
        assert_eq!(table_count, 4);

        let designers = SqlDesignerRepository::new(app.db_pool.clone()).list().await.expect("list");
        assert_eq!(designers.len(), 5);
        assert_eq!(designers[0].name, "Sophia Williams");

        app.db_pool.close().await;
    }
}
