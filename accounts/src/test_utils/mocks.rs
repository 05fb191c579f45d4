//! In-memory implementations of port traits
//!
//! These store data in memory and can be pre-populated for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::{AccountRepository, DataSource};
use crate::error::{DataSourceError, DomainError};

// ============================================================================
// In-Memory Data Source
// ============================================================================

pub struct InMemoryDataSource {
    name: String,
    reachable: bool,
}

impl InMemoryDataSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reachable: true,
        }
    }

    pub fn unreachable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reachable: false,
        }
    }
}

#[async_trait]
impl DataSource for InMemoryDataSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn check_connection(&self) -> Result<(), DataSourceError> {
        if self.reachable {
            Ok(())
        } else {
            Err(DataSourceError::Unavailable(self.name.clone()))
        }
    }
}

// ============================================================================
// In-Memory Account Repository
// ============================================================================

/// Stores accounts in insertion order; the first one is the bound account
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.accounts.write().unwrap().push(account);
        self
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get_account(&self) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.first().cloned())
    }

    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.iter().find(|a| a.id == *id).cloned())
    }
}
