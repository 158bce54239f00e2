// assumption-gate/src/runtime/gate.rs
// ============================================================================
// Module: Assumption Gate Evaluation
// Description: Directive evaluation and the skip-vs-proceed decision.
// Purpose: Evaluate declared assumptions against live fixtures deterministically.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! The gate intercepts the host's before-invocation hook, resolves each
//! assumption named by the method's directive against the live fixture,
//! invokes it, and aggregates the outcomes with AND semantics. Every name is
//! evaluated even after an earlier `false`, so the skip diagnostic reports
//! the complete ordered list of failing assumptions. Resolution and
//! invocation faults abort the gating pass without touching the status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::warn;

use crate::core::directive::AssumptionDirective;
use crate::core::directive::DirectiveSet;
use crate::core::evaluation::AssumptionOutcome;
use crate::core::evaluation::DirectiveEvaluation;
use crate::core::identifiers::AssumptionName;
use crate::core::identifiers::TestMethodId;
use crate::core::method::MethodValue;
use crate::interfaces::AssumptionFixture;
use crate::interfaces::GateError;
use crate::interfaces::InvocationContext;
use crate::interfaces::InvocationListener;
use crate::interfaces::InvocationStatus;

// ============================================================================
// SECTION: Assumption Gate
// ============================================================================

/// Test-execution gate evaluating assumption directives before each invocation.
///
/// The gate holds only immutable wiring, so one instance may serve
/// concurrent invocations; each gating pass operates solely on its own
/// context and fixture.
#[derive(Debug)]
pub struct AssumptionGate {
    /// Assumption wiring keyed by test method.
    directives: DirectiveSet,
}

impl AssumptionGate {
    /// Creates a gate over a validated directive set.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidDirectives`] when the wiring is malformed.
    pub fn new(directives: DirectiveSet) -> Result<Self, GateError> {
        directives.validate()?;
        Ok(Self {
            directives,
        })
    }

    /// Returns the directive wiring served by this gate.
    #[must_use]
    pub const fn directives(&self) -> &DirectiveSet {
        &self.directives
    }
}

impl InvocationListener for AssumptionGate {
    fn before_invocation(&self, context: &mut InvocationContext<'_>) -> Result<(), GateError> {
        let Some(directive) = self.directives.directive_for(&context.method) else {
            return Ok(());
        };

        let evaluation = evaluate_directive(&context.method, directive, context.fixture)?;
        if !evaluation.holds() {
            let failed = evaluation.failed_assumptions();
            let failed_names: Vec<&str> =
                failed.iter().map(AssumptionName::as_str).collect();
            warn!(
                method = %context.method,
                assumptions = ?failed_names,
                "skipping invocation because assumptions do not hold"
            );
            context.status = InvocationStatus::Skip;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Directive Evaluation
// ============================================================================

/// Evaluates every assumption named by a directive against a fixture.
///
/// Names are evaluated in declared order with no short-circuit, so the
/// returned evaluation carries an outcome for every entry, duplicates
/// included.
///
/// # Errors
///
/// Returns [`GateError`] when a name does not resolve, resolves to a
/// non-boolean method, or fails during invocation. A fault aborts the whole
/// pass; partial outcomes are discarded.
pub fn evaluate_directive(
    method: &TestMethodId,
    directive: &AssumptionDirective,
    fixture: &dyn AssumptionFixture,
) -> Result<DirectiveEvaluation, GateError> {
    let mut outcomes = Vec::with_capacity(directive.assumptions.len());
    for name in &directive.assumptions {
        let held = check_assumption(name, fixture)?;
        outcomes.push(AssumptionOutcome {
            name: name.clone(),
            held,
        });
    }
    Ok(DirectiveEvaluation {
        method: method.clone(),
        outcomes,
    })
}

/// Resolves and invokes one named assumption against a fixture.
fn check_assumption(
    name: &AssumptionName,
    fixture: &dyn AssumptionFixture,
) -> Result<bool, GateError> {
    let kind = fixture.resolve(name).ok_or_else(|| GateError::UnresolvedAssumption {
        name: name.clone(),
    })?;
    if !kind.is_boolean() {
        return Err(GateError::NonBooleanAssumption {
            name: name.clone(),
            kind,
        });
    }
    let value = fixture.invoke(name).map_err(|source| GateError::AssumptionInvocation {
        name: name.clone(),
        source,
    })?;
    match value {
        MethodValue::Boolean(held) => Ok(held),
        other => Err(GateError::NonBooleanValue {
            name: name.clone(),
            kind: other.kind(),
        }),
    }
}
