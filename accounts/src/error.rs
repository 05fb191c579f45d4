//! Unified error types for the account crate
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors surfaced through the repository port
//! - `DataSourceError`: Errors from the external resource handle
//! - `AppError`: Application layer errors (wraps domain errors for callers)

use thiserror::Error;

/// Domain layer errors
///
/// `Clone` so a test double can replay the same failure on every call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("No expectation programmed for {0}")]
    NoExpectation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from a data source handle
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSourceError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("No data source configured")]
    NotConfigured,
}

impl From<DataSourceError> for DomainError {
    fn from(e: DataSourceError) -> Self {
        DomainError::DataSource(e.to_string())
    }
}

/// Application layer errors - returned by services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}
