// assumption-gate/src/core/evaluation.rs
// ============================================================================
// Module: Assumption Gate Evaluation Records
// Description: Per-assumption outcomes and aggregate directive evaluations.
// Purpose: Record what each named assumption produced for one invocation.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Evaluating a directive produces one outcome per named assumption, in
//! declared order. The aggregate decision is the logical AND over all
//! outcomes and is vacuously true for an empty directive. Outcomes are never
//! cached or retried; every invocation context gets a fresh evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AssumptionName;
use crate::core::identifiers::TestMethodId;

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Outcome of evaluating one named assumption against one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssumptionOutcome {
    /// Assumption-method name that was invoked.
    pub name: AssumptionName,
    /// Whether the assumption held.
    pub held: bool,
}

// ============================================================================
// SECTION: Directive Evaluation
// ============================================================================

/// Result of evaluating a full directive for one test invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveEvaluation {
    /// Test method the directive is attached to.
    pub method: TestMethodId,
    /// Ordered outcomes, one per name in the directive.
    pub outcomes: Vec<AssumptionOutcome>,
}

impl DirectiveEvaluation {
    /// Returns true when every assumption held (vacuously true when empty).
    #[must_use]
    pub fn holds(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.held)
    }

    /// Returns the names that did not hold, in declared order.
    ///
    /// Duplicate names that failed more than once are reported once per
    /// occurrence.
    #[must_use]
    pub fn failed_assumptions(&self) -> Vec<AssumptionName> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.held)
            .map(|outcome| outcome.name.clone())
            .collect()
    }
}
