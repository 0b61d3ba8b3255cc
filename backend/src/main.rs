use dotenvy::dotenv;
use axum::{
    routing::{any, get},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use tower_http::cors::{AllowOrigin, CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod content_handlers;
}
mod models {
    pub mod content_models;
}
mod repositories {
    pub mod content_repository;
}
mod db;
mod schema;

use config::app_config::AppConfig;
use handlers::content_handlers;
use repositories::content_repository::{ContentRepository, ContentStore};

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    content: Arc<dyn ContentStore>,
}

/// The JSON API without transport layers.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(content_handlers::health_check))
        .route("/api/team-members", get(content_handlers::get_team_members))
        .route("/api/testimonials", get(content_handlers::get_testimonials))
        .route("/api/{*rest}", any(content_handlers::api_not_found))
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origin = match &config.frontend_url {
        Some(url) => AllowOrigin::exact(url.parse()?),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]))
}

fn app(state: Arc<AppState>, config: &AppConfig) -> anyhow::Result<Router> {
    let mut app = api_router(state);

    // Client-side routes resolve to index.html so deep links survive a reload.
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving frontend from {}", dir.display());
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    Ok(app
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = db::init_pool(&config.database_url)?;
    tracing::info!("Connected to {}", config.database_url);

    let state = Arc::new(AppState {
        content: Arc::new(ContentRepository::new(pool)),
    });

    let app = app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use repositories::content_repository::MockContentStore;
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>site</title>";

    fn config() -> AppConfig {
        AppConfig::from_lookup(|_| None).unwrap()
    }

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("backend-static-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        dir
    }

    async fn get_with_static_dir(name: &str, uri: &str) -> (StatusCode, String) {
        let mut config = config();
        config.static_dir = Some(static_dir(name));
        let state = Arc::new(AppState { content: Arc::new(MockContentStore::new()) });
        let response = app(state, &config)
            .unwrap()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn deep_link_serves_index() {
        let (status, body) = get_with_static_dir("deep-link", "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn unknown_api_path_is_not_found_even_with_static_dir() {
        let (status, body) = get_with_static_dir("unknown-api", "/api/team-member").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("<title>"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Not found");
    }

    #[tokio::test]
    async fn known_api_path_still_wins_over_catch_all() {
        let (status, body) = get_with_static_dir("known-api", "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn unknown_path_without_static_dir_is_not_found() {
        let state = Arc::new(AppState { content: Arc::new(MockContentStore::new()) });
        let response = app(state, &config())
            .unwrap()
            .oneshot(Request::builder().uri("/about").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let mut config = config();
        config.frontend_url = Some("https://example.com".to_string());
        let state = Arc::new(AppState { content: Arc::new(MockContentStore::new()) });
        let response = app(state, &config)
            .unwrap()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("Origin", "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn malformed_frontend_url_is_rejected() {
        let mut config = config();
        config.frontend_url = Some("not a\nheader".to_string());
        assert!(cors_layer(&config).is_err());
    }
}
