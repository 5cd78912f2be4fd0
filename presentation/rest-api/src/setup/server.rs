use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(config, container);
        tracing::info!(%addr, "server listening");
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Assembles the routes and middleware served by [`Server::run`].
///
/// The upload size limit is enforced by the upload handler, not by a
/// body-size middleware, so bodiless requests pass through untouched.
pub fn build_app(config: AppConfig, container: DependencyContainer) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (container.health_api, container.firebase_config_api),
        "Forum PWA Firebase Config API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", config.server.bind_address()));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .data(config.firebase_auth)
        .with(config.cors)
        .with(Tracing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{http::StatusCode, middleware::Cors, test::TestClient};
    use sqlx::postgres::PgPoolOptions;
    use std::collections::HashSet;
    use std::time::Duration;

    use crate::config::{firebase_auth_config::FirebaseAuthConfig, server_config::ServerConfig};

    fn client() -> TestClient<impl Endpoint> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy("postgres://nobody@127.0.0.1:1/forum")
            .unwrap();
        let config = AppConfig {
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: "8080".to_string(),
                max_upload_bytes: 1024,
            },
            cors: Cors::new(),
            firebase_auth: FirebaseAuthConfig {
                project_id: "forum-push".to_string(),
                admin_uids: HashSet::new(),
            },
        };
        let container = DependencyContainer::new(pool, config.server.max_upload_bytes);

        TestClient::new(build_app(config, container))
    }

    #[tokio::test]
    async fn should_serve_health_without_request_body() {
        let response = client().get("/health").send().await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let response = client().get("/openapi.json").send().await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reach_auth_check_on_bodiless_requests() {
        let client = client();

        client
            .get("/pwa/firebase-config")
            .send()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        client
            .delete("/pwa/firebase-config")
            .send()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
