// assumption-gate/tests/gate_listener.rs
// ============================================================================
// Module: Gate Listener Tests
// Description: Tests for the skip-vs-proceed decision at the host hook.
// ============================================================================
//! ## Overview
//! Validates that the before-invocation hook leaves passing invocations
//! untouched and converts failing assumptions into a skip.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use assumption_gate::AssumptionDirective;
use assumption_gate::AssumptionGate;
use assumption_gate::AssumptionName;
use assumption_gate::DirectiveSet;
use assumption_gate::InvocationContext;
use assumption_gate::InvocationListener;
use assumption_gate::InvocationStatus;
use assumption_gate::MethodTable;
use assumption_gate::TestMethodId;
use assumption_gate::evaluate_directive;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Environment fixture with the preconditions the scenarios toggle.
struct EnvFixture {
    /// Whether the suite believes it runs on Linux.
    linux: bool,
    /// Whether the suite believes the network is reachable.
    network: bool,
}

/// Builds the method table shared by the listener scenarios.
fn method_table() -> MethodTable<EnvFixture> {
    MethodTable::new()
        .with_predicate("isLinux", |env: &EnvFixture| env.linux)
        .with_predicate("hasNetwork", |env: &EnvFixture| env.network)
}

/// Builds a gate with one directive attached to the given method.
fn gate_for(method: &str, assumptions: &[&str]) -> AssumptionGate {
    let mut directives = DirectiveSet::new();
    directives
        .insert(
            TestMethodId::from(method),
            AssumptionDirective::from_names(assumptions.iter().copied()),
        )
        .unwrap();
    AssumptionGate::new(directives).unwrap()
}

// ============================================================================
// SECTION: No Directive
// ============================================================================

#[test]
fn method_without_directive_is_untouched() {
    let gate = AssumptionGate::new(DirectiveSet::new()).unwrap();
    let table = method_table();
    let env = EnvFixture {
        linux: false,
        network: false,
    };
    let fixture = table.bind(&env);

    let mut context = InvocationContext::new(TestMethodId::from("plainTest"), &fixture);
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Pending);
}

// ============================================================================
// SECTION: Empty Directive
// ============================================================================

#[test]
fn empty_directive_holds_vacuously() {
    let gate = gate_for("testWithoutPreconditions", &[]);
    let table = method_table();
    let env = EnvFixture {
        linux: false,
        network: false,
    };
    let fixture = table.bind(&env);

    let mut context =
        InvocationContext::new(TestMethodId::from("testWithoutPreconditions"), &fixture);
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Pending);
}

// ============================================================================
// SECTION: Passing Assumptions
// ============================================================================

#[test]
fn passing_assumptions_leave_status_untouched() {
    let gate = gate_for("testOnLinuxWithNetwork", &["isLinux", "hasNetwork"]);
    let table = method_table();
    let env = EnvFixture {
        linux: true,
        network: true,
    };
    let fixture = table.bind(&env);

    let mut context =
        InvocationContext::new(TestMethodId::from("testOnLinuxWithNetwork"), &fixture);
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Pending);
}

// ============================================================================
// SECTION: Failing Assumptions
// ============================================================================

#[test]
fn failing_assumption_marks_invocation_skipped() {
    let gate = gate_for("testOnLinuxWithNetwork", &["isLinux", "hasNetwork"]);
    let table = method_table();
    let env = EnvFixture {
        linux: false,
        network: true,
    };
    let fixture = table.bind(&env);

    let mut context =
        InvocationContext::new(TestMethodId::from("testOnLinuxWithNetwork"), &fixture);
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Skip);
}

#[test]
fn failed_assumption_names_are_reported_in_order() {
    let table = method_table();
    let env = EnvFixture {
        linux: false,
        network: true,
    };
    let fixture = table.bind(&env);

    let method = TestMethodId::from("testOnLinuxWithNetwork");
    let directive = AssumptionDirective::from_names(["isLinux", "hasNetwork"]);
    let evaluation = evaluate_directive(&method, &directive, &fixture).unwrap();

    assert!(!evaluation.holds());
    assert_eq!(evaluation.failed_assumptions(), vec![AssumptionName::from("isLinux")]);
}

#[test]
fn gate_only_transitions_toward_skip() {
    let gate = gate_for("testOnLinuxWithNetwork", &["isLinux", "hasNetwork"]);
    let table = method_table();
    let env = EnvFixture {
        linux: true,
        network: true,
    };
    let fixture = table.bind(&env);

    let mut context =
        InvocationContext::new(TestMethodId::from("testOnLinuxWithNetwork"), &fixture);
    context.status = InvocationStatus::Proceed;
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Proceed);
}
