//! Repository port traits
//!
//! These traits define the interface for reading accounts.
//! Implementations are provided by adapters; tests substitute doubles.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountId};
use crate::error::DomainError;

/// Repository for Account entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get the account this repository is bound to
    async fn get_account(&self) -> Result<Option<Account>, DomainError>;

    /// Find an account by ID
    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;
}
