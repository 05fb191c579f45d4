//! DataSource-backed adapter for AccountRepository

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::environment::EnvironmentDataSource;
use crate::config::Config;
use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::{AccountRepository, DataSource};
use crate::error::DomainError;

/// AccountRepository reading through a `DataSource` handle
pub struct DataSourceAccountRepository {
    data_source: Arc<dyn DataSource>,
}

impl DataSourceAccountRepository {
    /// Constructor used by unit tests: the handle is stored as given
    pub fn with_data_source(data_source: Arc<dyn DataSource>) -> Self {
        Self { data_source }
    }

    /// Constructor used in production
    pub fn new() -> Self {
        Self {
            data_source: acquire_real_data_source(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            data_source: Arc::new(EnvironmentDataSource::from_config(config)),
        }
    }

    pub fn data_source(&self) -> &Arc<dyn DataSource> {
        &self.data_source
    }
}

impl Default for DataSourceAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the data source from the process environment
///
/// Outside a provisioned production environment this yields a placeholder
/// handle; it never fails.
fn acquire_real_data_source() -> Arc<dyn DataSource> {
    let config = Config::from_env();
    let data_source = EnvironmentDataSource::from_config(&config);
    if data_source.is_placeholder() {
        tracing::warn!(
            environment = %config.environment,
            "No production data source, using placeholder"
        );
    } else {
        tracing::info!(data_source = %data_source.name(), "Data source resolved");
    }
    Arc::new(data_source)
}

#[async_trait]
impl AccountRepository for DataSourceAccountRepository {
    async fn get_account(&self) -> Result<Option<Account>, DomainError> {
        tracing::debug!(data_source = %self.data_source.name(), "get_account");
        Err(DomainError::NotImplemented(
            "AccountRepository::get_account".to_string(),
        ))
    }

    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        tracing::debug!(data_source = %self.data_source.name(), %id, "find_account");
        Err(DomainError::NotImplemented(
            "AccountRepository::find_account".to_string(),
        ))
    }
}
