// assumption-gate/src/core/method.rs
// ============================================================================
// Module: Assumption Gate Fixture Method Model
// Description: Declared return kinds and produced values of fixture methods.
// Purpose: Make non-boolean assumption targets detectable before invocation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A test fixture exposes zero-argument methods by name. Each registered
//! method carries a declared return kind so the gate can reject a
//! non-boolean assumption target without invoking it; invocation then
//! produces a [`MethodValue`] whose kind must match the declaration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Method Kinds
// ============================================================================

/// Declared return kind of a zero-argument fixture method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Method returns a boolean.
    Boolean,
    /// Method returns an integer.
    Integer,
    /// Method returns a floating-point number.
    Float,
    /// Method returns text.
    Text,
    /// Method returns nothing.
    Unit,
}

impl MethodKind {
    /// Returns true when the declared kind is boolean.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Unit => "unit",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Method Values
// ============================================================================

/// Value produced by invoking a zero-argument fixture method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MethodValue {
    /// Boolean result.
    Boolean(bool),
    /// Integer result.
    Integer(i64),
    /// Floating-point result.
    Float(f64),
    /// Text result.
    Text(String),
    /// No result.
    Unit,
}

impl MethodValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        match self {
            Self::Boolean(_) => MethodKind::Boolean,
            Self::Integer(_) => MethodKind::Integer,
            Self::Float(_) => MethodKind::Float,
            Self::Text(_) => MethodKind::Text,
            Self::Unit => MethodKind::Unit,
        }
    }
}
