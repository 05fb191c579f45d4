//! Stub implementation of AccountRepository
//!
//! Answers every port call from a `StubTable`. Tests program it with
//! `when_get_account()` / `when_find_account(&id)` and hand it to the
//! service exactly like a real repository.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::AccountRepository;
use crate::error::DomainError;
use crate::testing::stubs::{CallSignature, StubTable, Stubbing, UnmatchedCall};

/// Canned response for an account query
pub type AccountResponse = Result<Option<Account>, DomainError>;

const GET_ACCOUNT: &str = "get_account";
const FIND_ACCOUNT: &str = "find_account";

#[derive(Default)]
pub struct StubAccountRepository {
    table: StubTable<AccountResponse>,
}

impl StubAccountRepository {
    /// A double that rejects calls nobody programmed
    pub fn new() -> Self {
        Self::default()
    }

    /// A double that answers unprogrammed calls with `Ok(None)`
    pub fn lenient() -> Self {
        Self {
            table: StubTable::with_policy(UnmatchedCall::ReturnDefault),
        }
    }

    pub fn get_account_signature() -> CallSignature {
        CallSignature::new(GET_ACCOUNT)
    }

    pub fn find_account_signature(id: &AccountId) -> CallSignature {
        CallSignature::new(FIND_ACCOUNT).with_value(Value::String(id.to_string()))
    }

    pub fn when_get_account(&self) -> Stubbing<'_, AccountResponse> {
        self.table.when(Self::get_account_signature())
    }

    pub fn when_find_account(&self, id: &AccountId) -> Stubbing<'_, AccountResponse> {
        self.table.when(Self::find_account_signature(id))
    }

    /// Program an arbitrary signature
    pub fn when(&self, signature: CallSignature) -> Stubbing<'_, AccountResponse> {
        self.table.when(signature)
    }

    pub fn table(&self) -> &StubTable<AccountResponse> {
        &self.table
    }

    fn answer(&self, signature: CallSignature) -> AccountResponse {
        match self.table.respond(signature)? {
            Some(response) => response,
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountRepository for StubAccountRepository {
    async fn get_account(&self) -> Result<Option<Account>, DomainError> {
        self.answer(Self::get_account_signature())
    }

    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.answer(Self::find_account_signature(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_account;

    #[tokio::test]
    async fn get_account_returns_programmed_account() {
        let account = test_account();
        let repo = StubAccountRepository::new();
        repo.when_get_account().then_ok(Some(account.clone()));

        assert_eq!(repo.get_account().await.unwrap(), Some(account));
    }

    #[tokio::test]
    async fn unprogrammed_call_is_rejected_with_signature() {
        let repo = StubAccountRepository::new();

        let err = repo.get_account().await.unwrap_err();

        assert_eq!(err, DomainError::NoExpectation("get_account()".to_string()));
    }

    #[tokio::test]
    async fn lenient_double_returns_empty_result() {
        let repo = StubAccountRepository::lenient();

        assert_eq!(repo.get_account().await.unwrap(), None);
        assert_eq!(repo.find_account(&AccountId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_account_matches_only_the_programmed_id() {
        let account = test_account();
        let other = AccountId::new();
        let repo = StubAccountRepository::new();
        repo.when_find_account(&account.id)
            .then_ok(Some(account.clone()));

        assert_eq!(repo.find_account(&account.id).await.unwrap(), Some(account));
        assert!(matches!(
            repo.find_account(&other).await,
            Err(DomainError::NoExpectation(_))
        ));
    }

    #[tokio::test]
    async fn misspelled_stub_falls_back_to_lenient_default() {
        let repo = StubAccountRepository::lenient();
        repo.when(CallSignature::new("getAccount"))
            .then_ok(Some(test_account()));

        assert_eq!(repo.get_account().await.unwrap(), None);
        assert_eq!(
            repo.table().unused_stubs(),
            vec![CallSignature::new("getAccount")]
        );
    }

    #[tokio::test]
    async fn programmed_failure_is_replayed() {
        let repo = StubAccountRepository::new();
        repo.when_get_account()
            .then_fail(DomainError::DataSource("connection reset".to_string()));

        for _ in 0..2 {
            assert_eq!(
                repo.get_account().await,
                Err(DomainError::DataSource("connection reset".to_string()))
            );
        }
        assert_eq!(
            repo.table()
                .times_called(&StubAccountRepository::get_account_signature()),
            2
        );
    }
}
