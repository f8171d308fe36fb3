use std::error::Error;
use std::sync::Arc;

use echo_checkin::adapters::{FileIdentityProvider, HttpCheckInGateway, HttpGatewayConfig};
use echo_checkin::application::{GetDashboardHandler, GetDashboardQuery};
use echo_checkin::config::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ECHO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let installed = match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
    };
    installed.map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;
    config.validate()?;

    tracing::info!(
        base_url = %config.api.base_url,
        environment = ?config.environment,
        "starting echo-checkin"
    );

    let identity = Arc::new(FileIdentityProvider::new(&config.identity.path));
    let gateway = Arc::new(HttpCheckInGateway::new(
        HttpGatewayConfig::new(&config.api.base_url).with_timeout(config.api.timeout()),
    )?);

    let dashboard = GetDashboardHandler::new(identity, gateway)
        .handle(GetDashboardQuery::default())
        .await?;

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_install_reports_error() {
        let logging = LoggingConfig::default();

        assert!(init_tracing(&logging).is_ok());

        let err = init_tracing(&logging).unwrap_err();
        assert!(err.to_string().contains("failed to initialize tracing subscriber"));
    }
}
