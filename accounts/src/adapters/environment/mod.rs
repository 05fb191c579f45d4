//! Environment-resolved adapters
//!
//! The data source handle is resolved from the process environment; the
//! account repository reads through whichever handle it was given.

pub mod account_repo;
pub mod data_source;

pub use account_repo::DataSourceAccountRepository;
pub use data_source::EnvironmentDataSource;
