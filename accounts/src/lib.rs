//! Account injection
//!
//! An account repository that can be built against a real data source or an
//! injected one, a service that consumes it, and signature-matched test
//! doubles for substituting the repository in unit tests.
//! Uses hexagonal (ports & adapters) architecture.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "test_tools"))]
pub mod testing;

#[cfg(test)]
mod test_utils;
