//! Stoneline API Server
//!
//! Main entry point for the Stoneline backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stoneline_api::{AppState, create_router};
use stoneline_core::storage::{ImageStore, StorageConfig, StorageProvider};
use stoneline_db::connect;
use stoneline_shared::config::StorageSettings;
use stoneline_shared::{AppConfig, EmailService, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stoneline=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database).await?;
    info!("Connected to database");

    // Create JWT service
    let jwt_service = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        token_expiry_days: config.jwt.token_expiry_days,
    });

    // Create email service
    let email_service = EmailService::new(config.email.clone());
    if email_service.is_configured() {
        info!(
            smtp_host = %config.email.smtp_host,
            smtp_port = %config.email.smtp_port,
            "Email service configured"
        );
    } else {
        info!("Email service not configured; contact notifications disabled");
    }

    // Create image store
    let images = ImageStore::from_config(storage_config(&config.storage))?;
    info!(provider = %images.provider_name(), "Image store initialized");

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        email_service: Arc::new(email_service),
        images: Arc::new(images),
        environment: config.server.environment.clone(),
    };

    // Create router
    let app = create_router(state, &config.cors);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Maps the flat config section onto the image store's provider config.
fn storage_config(settings: &StorageSettings) -> StorageConfig {
    let provider = if settings.provider == "s3" {
        StorageProvider::s3(
            &settings.endpoint,
            &settings.bucket,
            &settings.access_key_id,
            &settings.secret_access_key,
            &settings.region,
        )
    } else {
        StorageProvider::local_fs(&settings.local_root)
    };

    StorageConfig::new(provider, &settings.public_base_url)
        .with_max_file_size(settings.max_file_size)
}
