// assumption-gate/src/interfaces/mod.rs
// ============================================================================
// Module: Assumption Gate Interfaces
// Description: Host-agnostic interfaces for fixtures and invocation gating.
// Purpose: Define the contract surfaces between the gate, the host test
//          runner, and the test fixture.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the assumption gate integrates with a host test
//! runner without embedding runner-specific details. The fixture capability
//! resolves assumption names to zero-argument methods; the listener hook is
//! the single point where the host hands an invocation to the gate. Broken
//! assumption wiring fails loudly through [`GateError`] and is never
//! converted into a skip.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::directive::DirectiveError;
use crate::core::identifiers::AssumptionName;
use crate::core::identifiers::TestMethodId;
use crate::core::method::MethodKind;
use crate::core::method::MethodValue;

// ============================================================================
// SECTION: Fixture Capability
// ============================================================================

/// Fixture method invocation errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The method body reported a failure.
    #[error("assumption method failed: {0}")]
    Failed(String),
    /// The fixture refused access to the method.
    #[error("assumption method is not accessible: {0}")]
    AccessDenied(String),
}

/// Capability exposed by a live test instance: resolve and invoke
/// zero-argument methods by name.
///
/// Implementations must be deterministic for the lifetime of one invocation
/// context; the gate resolves before it invokes and expects both calls to
/// observe the same registration.
pub trait AssumptionFixture {
    /// Resolves a method name to its declared return kind without invoking it.
    ///
    /// Returns `None` when no method with that name exists on the fixture.
    fn resolve(&self, name: &AssumptionName) -> Option<MethodKind>;

    /// Invokes the named zero-argument method against the live instance.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the method body fails or the fixture
    /// refuses access to the method.
    fn invoke(&self, name: &AssumptionName) -> Result<MethodValue, FixtureError>;
}

// ============================================================================
// SECTION: Invocation Context
// ============================================================================

/// Status of one pending test invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStatus {
    /// The invocation has not been gated yet.
    #[default]
    Pending,
    /// The host resumed execution of the test body.
    Proceed,
    /// The invocation was skipped.
    Skip,
}

/// One pending execution of one test method on one test instance.
///
/// The host framework owns the context; the gate only reads the method
/// identity and fixture, and may move the status to
/// [`InvocationStatus::Skip`]. It never forces a failure and never forces
/// success.
pub struct InvocationContext<'a> {
    /// Identity of the test method about to run.
    pub method: TestMethodId,
    /// Live test instance, exposed through the fixture capability.
    pub fixture: &'a dyn AssumptionFixture,
    /// Mutable invocation status.
    pub status: InvocationStatus,
}

impl<'a> InvocationContext<'a> {
    /// Creates a pending invocation context.
    #[must_use]
    pub fn new(method: TestMethodId, fixture: &'a dyn AssumptionFixture) -> Self {
        Self {
            method,
            fixture,
            status: InvocationStatus::Pending,
        }
    }
}

impl fmt::Debug for InvocationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("method", &self.method)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Gate Errors
// ============================================================================

/// Fatal assumption-wiring faults raised while gating an invocation.
///
/// These indicate a broken test suite (bad name, bad signature, failing
/// predicate) and always propagate to the host instead of being converted
/// into a skip.
#[derive(Debug, Error)]
pub enum GateError {
    /// Directive wiring failed validation.
    #[error("invalid assumption directives: {0}")]
    InvalidDirectives(#[from] DirectiveError),
    /// An assumption name did not resolve to a fixture method.
    #[error("could not find method [{name}] to run assumption")]
    UnresolvedAssumption {
        /// Assumption name that failed to resolve.
        name: AssumptionName,
    },
    /// A resolved assumption method does not declare a boolean return.
    #[error("assumption method [{name}] should return a boolean, not {kind}")]
    NonBooleanAssumption {
        /// Offending assumption name.
        name: AssumptionName,
        /// Declared return kind of the resolved method.
        kind: MethodKind,
    },
    /// Invoking an assumption method failed.
    #[error("could not invoke method [{name}] to run assumption")]
    AssumptionInvocation {
        /// Offending assumption name.
        name: AssumptionName,
        /// Underlying fixture failure.
        #[source]
        source: FixtureError,
    },
    /// An assumption method produced a non-boolean value at invocation time.
    #[error("assumption method [{name}] produced a non-boolean value: {kind}")]
    NonBooleanValue {
        /// Offending assumption name.
        name: AssumptionName,
        /// Kind of the produced value.
        kind: MethodKind,
    },
}

// ============================================================================
// SECTION: Invocation Listener
// ============================================================================

/// Host-framework hook invoked around each test invocation.
///
/// The host calls [`InvocationListener::before_invocation`] once per test
/// method invocation, before the body runs, then inspects the context status
/// to decide whether to execute or skip the body.
pub trait InvocationListener {
    /// Called once per test method invocation, before the body runs.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when assumption wiring is broken; the host must
    /// surface this as an invocation error, not a skip.
    fn before_invocation(&self, context: &mut InvocationContext<'_>) -> Result<(), GateError>;

    /// Called once per test method invocation, after the body ran.
    ///
    /// The default implementation does nothing.
    fn after_invocation(&self, context: &mut InvocationContext<'_>) {
        let _ = context;
    }
}
