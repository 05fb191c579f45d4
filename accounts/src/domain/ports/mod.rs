//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits, and test
//! doubles stand in for them during unit tests.

pub mod data_source;
pub mod repositories;

pub use data_source::DataSource;
pub use repositories::AccountRepository;

#[cfg(test)]
pub use data_source::MockDataSource;
#[cfg(test)]
pub use repositories::MockAccountRepository;
