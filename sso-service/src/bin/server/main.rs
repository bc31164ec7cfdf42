use sso_service::app::Application;
use sso_service::config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        token_ttl_minutes = config.token.ttl_minutes,
        session_validity_minutes = config.session.validity_minutes,
        sweep_interval_secs = config.sweeper.interval_seconds,
        "Configuration loaded"
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
