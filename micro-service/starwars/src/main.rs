use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::{FmtSubscriber, layer::SubscriberExt};

use app_config::{AppConfig, LoggingConfig, Server};
use app_error::AppError;
use app_store::{MemoryPostStore, PostStore};
use app_utils::SwapiClient;
use micro_starwars::{routes, schema};

fn init_tracing(logging: &LoggingConfig) -> Result<(), AppError> {
    let log_level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder().with_max_level(log_level);
    let result = if logging.format == "json" {
        tracing::subscriber::set_global_default(
            builder.json().finish().with(sentry_tracing::layer()),
        )
    } else {
        tracing::subscriber::set_global_default(builder.finish().with(sentry_tracing::layer()))
    };

    result.context("Failed to set tracing subscriber")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    if std::env::args().any(|arg| arg == "--print-schema") {
        println!("{}", schema::export_sdl());
        return Ok(());
    }

    // Loading logs through a bootstrap subscriber; the configured one needs the config
    let bootstrap = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    let config = tracing::subscriber::with_default(bootstrap, AppConfig::load)?;

    // Sentry only when a DSN is configured
    let sentry_guard = if !config.monitoring.sentry.dsn.is_empty() {
        Some(sentry::init((
            config.monitoring.sentry.dsn.clone(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                sample_rate: config.monitoring.sentry.sample_rate,
                traces_sample_rate: config.monitoring.sentry.traces_sample_rate,
                environment: Some(config.monitoring.sentry.environment.clone().into()),
                ..Default::default()
            },
        )))
    } else {
        None
    };

    init_tracing(&config.monitoring.logging)?;

    info!(
        "Starting Star Wars GraphQL service in {} environment at {}",
        config.environment,
        chrono::Utc::now()
    );
    if sentry_guard.is_none() {
        info!("Sentry DSN not configured, skipping Sentry initialization");
    }

    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    let swapi = SwapiClient::new(
        &config.swapi.base_url,
        &config.swapi.format,
        config.swapi.timeout(),
    )?;
    info!(base_url = %swapi.base_url(), "SWAPI client ready");

    let schema = schema::create_schema(store, swapi);
    let app = routes::create_routes(schema, &config);

    let address = Server::from(&config).bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .context(format!("Failed to bind to address: {}", address))?;

    info!("GraphQL playground available at: http://{}", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
