//! Account injection demo binary
//!
//! Wires the production repository into the account service and reports
//! what the environment resolved to.

use std::sync::Arc;

use account_injection::adapters::DataSourceAccountRepository;
use account_injection::app::AccountService;
use account_injection::config::Config;
use account_injection::error::{AppError, DomainError};
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env once, before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,account_injection=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting account injection...");

    let config = Config::from_env();
    tracing::info!(environment = %config.environment, "Configuration loaded");

    let repository = Arc::new(DataSourceAccountRepository::from_config(&config));
    let data_source = repository.data_source().clone();

    match data_source.check_connection().await {
        Ok(()) => tracing::info!(data_source = %data_source.name(), "Data source reachable"),
        Err(e) => tracing::warn!(data_source = %data_source.name(), "{}", e),
    }

    let service = AccountService::new(repository);

    match service.get_account().await {
        Ok(Some(account)) => {
            tracing::info!(id = %account.id, holder = %account.holder, "Account loaded")
        }
        Ok(None) => tracing::info!("No account available"),
        Err(AppError::Domain(DomainError::NotImplemented(op))) => {
            tracing::warn!("{} has no implementation yet", op)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
