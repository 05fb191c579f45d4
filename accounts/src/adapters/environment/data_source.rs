//! Data source resolved from configuration
//!
//! Only a production environment with `DATA_SOURCE_URL` set points at a real
//! resource, and no driver for it is linked into this crate, so every
//! connection check reports the handle as unavailable.

use async_trait::async_trait;

use crate::config::{Config, Environment};
use crate::domain::ports::DataSource;
use crate::error::DataSourceError;

pub struct EnvironmentDataSource {
    environment: Environment,
    url: Option<String>,
}

impl EnvironmentDataSource {
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.environment,
            url: config.data_source_url.clone(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// True when the handle stands in for a missing production resource
    pub fn is_placeholder(&self) -> bool {
        self.environment != Environment::Production || self.url.is_none()
    }
}

#[async_trait]
impl DataSource for EnvironmentDataSource {
    fn name(&self) -> String {
        match &self.url {
            Some(url) => format!("{}:{}", self.environment, url),
            None => format!("{}:placeholder", self.environment),
        }
    }

    async fn check_connection(&self) -> Result<(), DataSourceError> {
        let url = self.url.as_deref().ok_or(DataSourceError::NotConfigured)?;

        if self.environment != Environment::Production {
            return Err(DataSourceError::Unavailable(format!(
                "{} is only reachable from production, running in {}",
                url, self.environment
            )));
        }

        Err(DataSourceError::Unavailable(format!(
            "no driver linked for {}",
            url
        )))
    }
}
