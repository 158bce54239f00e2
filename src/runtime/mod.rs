// assumption-gate/src/runtime/mod.rs
// ============================================================================
// Module: Assumption Gate Runtime
// Description: Directive evaluation, skip decision, and method registry.
// Purpose: Gate test invocations against registered assumption wiring.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the gate itself and the in-memory method table
//! that binds fixture instances to named predicates. The host hook and any
//! direct callers go through the same evaluation path.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod gate;
pub mod methods;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use gate::AssumptionGate;
pub use gate::evaluate_directive;
pub use methods::BoundFixture;
pub use methods::MethodFn;
pub use methods::MethodTable;
