// assumption-gate/src/core/mod.rs
// ============================================================================
// Module: Assumption Gate Core Types
// Description: Canonical directive, method, and evaluation structures.
// Purpose: Provide stable, serializable types for assumption wiring and outcomes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the declarative assumption wiring attached to test
//! methods and the records produced when that wiring is evaluated. These
//! types are the canonical source of truth for any host-facing surface.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod directive;
pub mod evaluation;
pub mod identifiers;
pub mod method;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use directive::AssumptionDirective;
pub use directive::DirectiveError;
pub use directive::DirectiveSet;
pub use evaluation::AssumptionOutcome;
pub use evaluation::DirectiveEvaluation;
pub use identifiers::AssumptionName;
pub use identifiers::TestMethodId;
pub use method::MethodKind;
pub use method::MethodValue;
