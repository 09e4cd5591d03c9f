use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lezzetmetre_api::{
    config::Config,
    middleware::auth::JwtSecret,
    routes,
    services::{gemini::GeminiClient, sheets::SheetsClient},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let sheets = Arc::new(SheetsClient::new(&config)?);
    let gemini = Arc::new(GeminiClient::new(&config)?);
    info!("Spreadsheet and language-model clients configured");

    let state = AppState {
        config: config.clone(),
        sheets,
        gemini,
    };

    // The form is served from school kiosks and personal phones alike, so
    // origins are open; the staff surface is gated by the session token.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_origin(AllowOrigin::any());

    let jwt_secret = JwtSecret(config.jwt_secret.clone());

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Student surface
        .route("/menu/today", get(routes::menu::today))
        .route("/vote/active", get(routes::vote::active))
        .route("/feedback", post(routes::feedback::submit))
        // Staff surface
        .route("/auth/login", post(routes::auth::login))
        .route("/admin/stats", get(routes::admin::stats))
        .route("/admin/records", get(routes::admin::records))
        .route("/admin/models", get(routes::admin::models))
        .route("/admin/report", post(routes::admin::generate_report))
        .route("/admin/reports", get(routes::admin::list_reports))
        .route("/kitchen/today", get(routes::kitchen::today))
        .layer(axum::Extension(jwt_secret))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("LezzetMetre API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
