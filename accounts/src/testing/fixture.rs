//! Per-test fixture for AccountService
//!
//! Each `setup()` builds a fresh stub repository and a fresh service wired
//! to it, so nothing programmed in one test case is visible in another.

use std::sync::Arc;

use crate::app::AccountService;
use crate::testing::{StubAccountRepository, StubError};

pub struct AccountServiceFixture {
    service: AccountService<StubAccountRepository>,
    repository: Arc<StubAccountRepository>,
}

impl AccountServiceFixture {
    /// Strict fixture: unprogrammed calls fail
    pub fn setup() -> Self {
        Self::with_repository(StubAccountRepository::new())
    }

    pub fn with_repository(repository: StubAccountRepository) -> Self {
        let repository = Arc::new(repository);
        let service = AccountService::new(repository.clone());
        Self {
            service,
            repository,
        }
    }

    pub fn service(&self) -> &AccountService<StubAccountRepository> {
        &self.service
    }

    /// The double currently wired into the service
    pub fn repository(&self) -> &StubAccountRepository {
        &self.repository
    }

    /// Swap the service's repository after construction
    pub fn substitute(&mut self, repository: StubAccountRepository) -> Arc<StubAccountRepository> {
        let repository = Arc::new(repository);
        self.service.replace_repository(repository.clone());
        self.repository = repository.clone();
        repository
    }

    /// End the test case, failing if the current double has unused stubs
    pub fn teardown(self) -> Result<(), StubError> {
        let result = self.repository.table().verify_all_used();
        match &result {
            Ok(()) => tracing::debug!(
                calls = self.repository.table().calls().len(),
                "fixture torn down"
            ),
            Err(e) => tracing::warn!("fixture torn down with {}", e),
        }
        result
    }
}
