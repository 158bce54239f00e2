// assumption-gate/src/core/identifiers.rs
// ============================================================================
// Module: Assumption Gate Identifiers
// Description: Canonical opaque identifiers for assumptions and test methods.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! the assumption gate. Identifiers are opaque and serialize as strings.
//! Validation is handled at directive-registration boundaries rather than
//! within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Name of a zero-argument boolean assumption method on a test fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssumptionName(String);

impl AssumptionName {
    /// Creates a new assumption name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssumptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AssumptionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssumptionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Identifier of one test method known to the host framework.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestMethodId(String);

impl TestMethodId {
    /// Creates a new test method identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TestMethodId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TestMethodId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
