//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{Account, AccountId};

/// Create a test account with default values
pub fn test_account() -> Account {
    test_account_for("test-holder")
}

/// Create a test account for a specific holder
pub fn test_account_for(holder: &str) -> Account {
    Account {
        id: AccountId(Uuid::new_v4()),
        holder: holder.to_string(),
        created_at: Utc::now(),
    }
}
