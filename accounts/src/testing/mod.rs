//! Test doubles
//!
//! Reflection-free replacements for annotation-driven mocking:
//! - `stubs`: a call table keyed on exact `(operation, arguments)` signatures
//! - `stub_account_repo`: an `AccountRepository` answered from a stub table
//! - `error`: failures raised by stub tables
//! - `fixture`: per-test setup/teardown that wires doubles into a service

pub mod error;
pub mod fixture;
pub mod stub_account_repo;
pub mod stubs;

pub use error::StubError;
pub use fixture::AccountServiceFixture;
pub use stub_account_repo::{AccountResponse, StubAccountRepository};
pub use stubs::{CallSignature, StubTable, Stubbing, UnmatchedCall};
