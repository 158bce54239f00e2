// assumption-gate/src/lib.rs
// ============================================================================
// Module: Assumption Gate Library
// Description: Public API surface for the assumption gate.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The assumption gate decides, per test invocation, whether the named
//! assumption predicates declared for a test method permit execution. When
//! one or more assumptions do not hold, the invocation is marked as skipped
//! instead of executed or failed. The gate is host-agnostic and integrates
//! through explicit interfaces rather than embedding into a test runner.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::AssumptionDirective;
pub use crate::core::AssumptionName;
pub use crate::core::AssumptionOutcome;
pub use crate::core::DirectiveError;
pub use crate::core::DirectiveEvaluation;
pub use crate::core::DirectiveSet;
pub use crate::core::MethodKind;
pub use crate::core::MethodValue;
pub use crate::core::TestMethodId;
pub use crate::interfaces::AssumptionFixture;
pub use crate::interfaces::FixtureError;
pub use crate::interfaces::GateError;
pub use crate::interfaces::InvocationContext;
pub use crate::interfaces::InvocationListener;
pub use crate::interfaces::InvocationStatus;
pub use crate::runtime::AssumptionGate;
pub use crate::runtime::BoundFixture;
pub use crate::runtime::MethodFn;
pub use crate::runtime::MethodTable;
pub use crate::runtime::evaluate_directive;
