use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the settings store answers, "degraded" otherwise
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Settings store reachability: "up" or "down"
    pub database: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn database_reachable(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "health check could not reach database");
                false
            }
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public; always answers 200 so liveness probes do not restart the
    /// service over a database outage. Readiness tooling should inspect
    /// the `database` field.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database_up = self.database_reachable().await;

        Json(HealthCheckResponse {
            status: if database_up { "healthy" } else { "degraded" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: if database_up { "up" } else { "down" }.to_string(),
        })
    }
}
