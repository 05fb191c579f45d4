//! Errors raised by stub tables

use thiserror::Error;

use crate::error::DomainError;
use crate::testing::stubs::CallSignature;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StubError {
    #[error("No expectation programmed for {signature}")]
    NoExpectation { signature: CallSignature },

    #[error("{} stub(s) programmed but never called: {}", .0.len(), join_signatures(.0))]
    UnusedStubs(Vec<CallSignature>),

    #[error("Argument cannot be captured: {0}")]
    InvalidArgument(String),
}

impl From<StubError> for DomainError {
    fn from(e: StubError) -> Self {
        match e {
            StubError::NoExpectation { signature } => {
                DomainError::NoExpectation(signature.to_string())
            }
            e => DomainError::Internal(e.to_string()),
        }
    }
}

fn join_signatures(signatures: &[CallSignature]) -> String {
    signatures
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
