//! Signature-matched stub tables
//!
//! A `StubTable` maps a `CallSignature` to a canned response. Lookups are
//! exact: the operation name and every argument must be equal to what was
//! programmed. A call nobody programmed is handled by the table's
//! `UnmatchedCall` policy.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;

use crate::testing::StubError;

/// An operation name plus its captured arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSignature {
    pub operation: String,
    pub args: Vec<Value>,
}

impl CallSignature {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            args: Vec::new(),
        }
    }

    /// Append an already captured argument
    pub fn with_value(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }

    /// Capture an argument through its serde representation
    pub fn with_arg<T: Serialize + ?Sized>(self, arg: &T) -> Result<Self, StubError> {
        let value =
            serde_json::to_value(arg).map_err(|e| StubError::InvalidArgument(e.to_string()))?;
        Ok(self.with_value(value))
    }
}

impl std::fmt::Display for CallSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .args
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.operation, args)
    }
}

/// What a stub table does with a call that matches no programmed stub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedCall {
    /// Fail with `StubError::NoExpectation`
    #[default]
    Reject,
    /// Answer with no response; the double falls back to its return type's default
    ReturnDefault,
}

struct Stub<R> {
    signature: CallSignature,
    response: R,
    hits: usize,
}

struct StubState<R> {
    policy: UnmatchedCall,
    stubs: Vec<Stub<R>>,
    calls: Vec<CallSignature>,
}

/// Canned responses keyed by exact call signature
pub struct StubTable<R> {
    state: Mutex<StubState<R>>,
}

impl<R: Clone> StubTable<R> {
    pub fn new() -> Self {
        Self::with_policy(UnmatchedCall::default())
    }

    pub fn with_policy(policy: UnmatchedCall) -> Self {
        Self {
            state: Mutex::new(StubState {
                policy,
                stubs: Vec::new(),
                calls: Vec::new(),
            }),
        }
    }

    // Poisoned locks are recovered.
    fn state(&self) -> MutexGuard<'_, StubState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn policy(&self) -> UnmatchedCall {
        self.state().policy
    }

    /// Start programming a response for `signature`
    pub fn when(&self, signature: CallSignature) -> Stubbing<'_, R> {
        Stubbing {
            table: self,
            signature,
        }
    }

    fn program(&self, signature: CallSignature, response: R) {
        let mut state = self.state();
        if let Some(stub) = state.stubs.iter_mut().find(|s| s.signature == signature) {
            stub.response = response;
            stub.hits = 0;
            return;
        }
        tracing::trace!(%signature, "stub programmed");
        state.stubs.push(Stub {
            signature,
            response,
            hits: 0,
        });
    }

    /// Record a call and look up its programmed response
    ///
    /// Returns `Ok(None)` only under `UnmatchedCall::ReturnDefault`.
    pub fn respond(&self, signature: CallSignature) -> Result<Option<R>, StubError> {
        let mut state = self.state();
        state.calls.push(signature.clone());

        if let Some(stub) = state.stubs.iter_mut().find(|s| s.signature == signature) {
            stub.hits += 1;
            return Ok(Some(stub.response.clone()));
        }

        match state.policy {
            UnmatchedCall::Reject => {
                tracing::debug!(%signature, "call matched no stub, rejecting");
                Err(StubError::NoExpectation { signature })
            }
            UnmatchedCall::ReturnDefault => {
                tracing::debug!(%signature, "call matched no stub, returning default");
                Ok(None)
            }
        }
    }

    /// Every call received, in order
    pub fn calls(&self) -> Vec<CallSignature> {
        self.state().calls.clone()
    }

    pub fn times_called(&self, signature: &CallSignature) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| *c == signature)
            .count()
    }

    /// Stubs that were programmed but never matched a call
    pub fn unused_stubs(&self) -> Vec<CallSignature> {
        self.state()
            .stubs
            .iter()
            .filter(|s| s.hits == 0)
            .map(|s| s.signature.clone())
            .collect()
    }

    pub fn verify_all_used(&self) -> Result<(), StubError> {
        let unused = self.unused_stubs();
        if unused.is_empty() {
            Ok(())
        } else {
            Err(StubError::UnusedStubs(unused))
        }
    }

    /// Forget every stub and recorded call; the policy is kept
    pub fn reset(&self) {
        let mut state = self.state();
        state.stubs.clear();
        state.calls.clear();
    }
}

impl<R: Clone> Default for StubTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pending stub, completed by `then_return`
#[must_use = "a stub is only programmed once a response is given"]
pub struct Stubbing<'a, R: Clone> {
    table: &'a StubTable<R>,
    signature: CallSignature,
}

impl<R: Clone> Stubbing<'_, R> {
    pub fn then_return(self, response: R) {
        self.table.program(self.signature, response);
    }
}

impl<T: Clone, E: Clone> Stubbing<'_, Result<T, E>> {
    pub fn then_ok(self, value: T) {
        self.then_return(Ok(value));
    }

    pub fn then_fail(self, error: E) {
        self.then_return(Err(error));
    }
}
