// assumption-gate/tests/directive_wiring.rs
// ============================================================================
// Module: Directive Wiring Tests
// Description: Tests for directive registration, validation, and loading.
// ============================================================================
//! ## Overview
//! Validates registration-time wiring rules: duplicate and malformed
//! registrations are rejected, absence is distinct from an empty directive,
//! and declaratively loaded sets gate identically to code-built ones.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use assumption_gate::AssumptionDirective;
use assumption_gate::AssumptionGate;
use assumption_gate::DirectiveError;
use assumption_gate::DirectiveSet;
use assumption_gate::GateError;
use assumption_gate::InvocationContext;
use assumption_gate::InvocationListener;
use assumption_gate::InvocationStatus;
use assumption_gate::MethodTable;
use assumption_gate::TestMethodId;
use serde_json::json;

// ============================================================================
// SECTION: Registration Rules
// ============================================================================

#[test]
fn duplicate_method_registration_is_rejected() {
    let mut directives = DirectiveSet::new();
    directives
        .insert(TestMethodId::from("testUpload"), AssumptionDirective::from_names(["hasDisk"]))
        .unwrap();

    let error = directives
        .insert(TestMethodId::from("testUpload"), AssumptionDirective::from_names(["isLinux"]))
        .unwrap_err();

    assert_eq!(error, DirectiveError::DuplicateMethod("testUpload".to_string()));
    assert_eq!(directives.len(), 1);
}

#[test]
fn empty_assumption_name_is_rejected() {
    let mut directives = DirectiveSet::new();
    let error = directives
        .insert(TestMethodId::from("testUpload"), AssumptionDirective::from_names([""]))
        .unwrap_err();

    assert_eq!(error, DirectiveError::EmptyAssumptionName("testUpload".to_string()));
}

#[test]
fn empty_method_id_is_rejected() {
    let mut directives = DirectiveSet::new();
    let error = directives
        .insert(TestMethodId::from(""), AssumptionDirective::from_names(["hasDisk"]))
        .unwrap_err();

    assert_eq!(error, DirectiveError::EmptyMethodId);
}

// ============================================================================
// SECTION: Absence vs Empty
// ============================================================================

#[test]
fn absent_directive_is_distinct_from_empty_directive() {
    let mut directives = DirectiveSet::new();
    directives
        .insert(TestMethodId::from("testWithEmptyDirective"), AssumptionDirective::default())
        .unwrap();

    let empty = directives.directive_for(&TestMethodId::from("testWithEmptyDirective"));
    assert!(empty.is_some_and(AssumptionDirective::is_empty));

    let absent = directives.directive_for(&TestMethodId::from("testWithoutDirective"));
    assert!(absent.is_none());
}

// ============================================================================
// SECTION: Declarative Loading
// ============================================================================

#[test]
fn deserialized_wiring_is_validated_at_gate_construction() {
    let directives: DirectiveSet = serde_json::from_value(json!({
        "testUpload": { "assumptions": [""] }
    }))
    .unwrap();

    let error = AssumptionGate::new(directives).unwrap_err();
    assert!(matches!(
        error,
        GateError::InvalidDirectives(DirectiveError::EmptyAssumptionName(_))
    ));
}

#[test]
fn deserialized_wiring_gates_like_code_built_wiring() {
    let directives: DirectiveSet = serde_json::from_value(json!({
        "testUpload": { "assumptions": ["hasDisk"] }
    }))
    .unwrap();
    let gate = AssumptionGate::new(directives).unwrap();

    let table = MethodTable::new().with_predicate("hasDisk", |full: &bool| !*full);
    let disk_full = true;
    let fixture = table.bind(&disk_full);

    let mut context = InvocationContext::new(TestMethodId::from("testUpload"), &fixture);
    gate.before_invocation(&mut context).unwrap();

    assert_eq!(context.status, InvocationStatus::Skip);
}
