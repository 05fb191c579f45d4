//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod account;

pub use account::{Account, AccountId};
