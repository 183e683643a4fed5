//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{
    AuthConfig, PgAuthRepository,
    domain::repository::AuthSessionRepository,
    middleware::{AuthMiddlewareState, require_auth},
    router::auth_router,
};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use base64::Engine;
use base64::engine::general_purpose;
use catalog::{PgBookRepository, books_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired auth sessions
    // Errors here should not prevent server startup
    let auth_store_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_store_for_cleanup.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(
                sessions_deleted = sessions,
                "Auth session cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let auth_config = Arc::new(load_auth_config()?);

    let auth_repo = PgAuthRepository::new(pool.clone());
    let book_repo = PgBookRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Every /books route sits behind the session guard; /login and /logout
    // handle their own token checks.
    let guard_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo.clone()),
        config: auth_config.clone(),
    };

    let books = books_router(book_repo).layer(middleware::from_fn_with_state(
        guard_state,
        require_auth::<PgAuthRepository>,
    ));

    // Build router
    let app = Router::new()
        .merge(auth_router(auth_repo, auth_config))
        .nest("/books", books)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the auth configuration from the environment
///
/// Debug builds fall back to a random per-process secret; production
/// requires `SESSION_SECRET` (base64, 32 bytes decoded).
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(ttl) = env::var("TOKEN_TTL_SECS") {
        config.token_ttl = Duration::from_secs(ttl.parse()?);
    }

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}
