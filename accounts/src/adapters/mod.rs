//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod environment;

pub use environment::{DataSourceAccountRepository, EnvironmentDataSource};
