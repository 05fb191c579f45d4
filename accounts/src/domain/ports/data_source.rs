//! Data source port
//!
//! A handle to the external resource a repository reads from.

use async_trait::async_trait;

use crate::error::DataSourceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human readable name of the resource, used in logs
    fn name(&self) -> String;

    /// Verify the resource is reachable
    async fn check_connection(&self) -> Result<(), DataSourceError>;
}
