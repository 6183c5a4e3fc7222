use std::time::Duration;

use color_eyre::eyre::Result;
use registration_adapters::{
    PostgresTokenStore, PostgresUserStore, PostmarkEmailClient, SystemClock,
    config::RegistrationServiceSetting,
};
use registration_core::Email;
use registration_service_lib::{RegistrationService, helpers::configure_postgresql};
use reqwest::Client as HttpClient;
use secrecy::Secret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = RegistrationServiceSetting::load();

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql().await;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let token_store = PostgresTokenStore::new(pg_pool);

    // Create email client
    let http_client = HttpClient::builder()
        .timeout(Duration::from_millis(config.email_client.timeout_in_millis))
        .build()?;

    let email_client = PostmarkEmailClient::new(
        config.email_client.base_url.clone(),
        Email::try_from(Secret::from(config.email_client.sender.clone()))?,
        config.email_client.auth_token.clone(),
        http_client,
    );

    // Assemble the service
    let service = RegistrationService::new(
        user_store,
        token_store,
        email_client,
        SystemClock::new(),
        config.app.confirmation_url.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&config.app.address).await?;
    tracing::info!("Starting registration service...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
