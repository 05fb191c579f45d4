//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//! Signature-matched doubles live in `crate::testing`; these are plain fakes
//! for tests that only need working storage.

pub mod fixtures;
pub mod logs;
pub mod mocks;

pub use fixtures::*;
pub use logs::CapturedLogs;
pub use mocks::*;
