//! Account service
//!
//! Reads accounts through whichever `AccountRepository` it was given. The
//! repository is supplied at construction and can be replaced later by a
//! test harness through `replace_repository`.

use std::sync::Arc;

use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::AccountRepository;
use crate::error::AppError;

/// Service for reading accounts
pub struct AccountService<AR = dyn AccountRepository>
where
    AR: AccountRepository + ?Sized,
{
    accounts: Arc<AR>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository + ?Sized,
{
    pub fn new(accounts: Arc<AR>) -> Self {
        Self { accounts }
    }

    /// Get the account the repository is bound to
    pub async fn get_account(&self) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.get_account().await?)
    }

    /// Get the bound account, treating an empty result as an error
    pub async fn require_account(&self) -> Result<Account, AppError> {
        self.get_account()
            .await?
            .ok_or_else(|| AppError::NotFound("No account available".to_string()))
    }

    /// Find an account by ID
    pub async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.find_account(id).await?)
    }

    pub fn repository(&self) -> &Arc<AR> {
        &self.accounts
    }

    /// Replace the repository for every subsequent call
    ///
    /// Returns the repository that was in use before.
    pub fn replace_repository(&mut self, accounts: Arc<AR>) -> Arc<AR> {
        tracing::debug!("account repository replaced");
        std::mem::replace(&mut self.accounts, accounts)
    }
}
