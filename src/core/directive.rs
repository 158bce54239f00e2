// assumption-gate/src/core/directive.rs
// ============================================================================
// Module: Assumption Gate Directives
// Description: Declarative assumption wiring attached to test methods.
// Purpose: Associate ordered assumption-name lists with test-method identities.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A directive is the declarative list of assumption-method names attached to
//! one test method at registration time. Directives are immutable metadata;
//! the gate reads them once per invocation. A [`DirectiveSet`] keys
//! directives by test-method identity and distinguishes a method with no
//! directive from one with an empty directive.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::AssumptionName;
use crate::core::identifiers::TestMethodId;

// ============================================================================
// SECTION: Directive
// ============================================================================

/// Ordered list of assumption-method names attached to one test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssumptionDirective {
    /// Assumption-method names in declared order, duplicates preserved.
    pub assumptions: Vec<AssumptionName>,
}

impl AssumptionDirective {
    /// Creates a directive from an ordered list of assumption names.
    #[must_use]
    pub const fn new(assumptions: Vec<AssumptionName>) -> Self {
        Self {
            assumptions,
        }
    }

    /// Creates a directive from string-like assumption names.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assumptions: names.into_iter().map(AssumptionName::new).collect(),
        }
    }

    /// Returns the number of named assumptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assumptions.len()
    }

    /// Returns true when the directive names no assumptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assumptions.is_empty()
    }
}

// ============================================================================
// SECTION: Directive Set
// ============================================================================

/// Registration-time association from test methods to directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DirectiveSet {
    /// Directives keyed by test-method identifier.
    directives: BTreeMap<TestMethodId, AssumptionDirective>,
}

impl DirectiveSet {
    /// Creates an empty directive set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directives: BTreeMap::new(),
        }
    }

    /// Registers a directive for a test method.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError`] when the method already carries a directive
    /// or the wiring is malformed.
    pub fn insert(
        &mut self,
        method: TestMethodId,
        directive: AssumptionDirective,
    ) -> Result<(), DirectiveError> {
        validate_entry(&method, &directive)?;
        if self.directives.contains_key(&method) {
            return Err(DirectiveError::DuplicateMethod(method.to_string()));
        }
        self.directives.insert(method, directive);
        Ok(())
    }

    /// Returns the directive for a method, or `None` when none is attached.
    #[must_use]
    pub fn directive_for(&self, method: &TestMethodId) -> Option<&AssumptionDirective> {
        self.directives.get(method)
    }

    /// Returns the number of registered directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns true when no directives are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Validates every registered method/directive pairing.
    ///
    /// Deserialized sets bypass [`DirectiveSet::insert`], so gates re-run
    /// this check at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError`] for the first malformed pairing found.
    pub fn validate(&self) -> Result<(), DirectiveError> {
        for (method, directive) in &self.directives {
            validate_entry(method, directive)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a single method/directive pairing.
fn validate_entry(
    method: &TestMethodId,
    directive: &AssumptionDirective,
) -> Result<(), DirectiveError> {
    if method.as_str().is_empty() {
        return Err(DirectiveError::EmptyMethodId);
    }
    if directive.assumptions.iter().any(|name| name.as_str().is_empty()) {
        return Err(DirectiveError::EmptyAssumptionName(method.to_string()));
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Directive wiring errors raised at registration or validation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// A directive is already registered for the method.
    #[error("assumption directive already registered for test method [{0}]")]
    DuplicateMethod(String),
    /// A directive names an empty assumption method.
    #[error("assumption name must not be empty for test method [{0}]")]
    EmptyAssumptionName(String),
    /// A directive is registered under an empty test-method identifier.
    #[error("test method identifier must not be empty")]
    EmptyMethodId,
}
