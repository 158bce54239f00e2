// assumption-gate/src/runtime/methods.rs
// ============================================================================
// Module: Assumption Gate Method Table
// Description: Explicit name-to-method registry bound to fixture instances.
// Purpose: Provide the compile-time-registered fixture capability without
//          runtime reflection.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! A [`MethodTable`] is the explicit mapping from assumption names to
//! zero-argument function references that a test author supplies alongside
//! the directive. Binding a table to a live instance yields a
//! [`BoundFixture`], the [`AssumptionFixture`] implementation consumed by
//! the gate. Each entry carries its declared return kind so mis-typed
//! registrations fail before invocation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::identifiers::AssumptionName;
use crate::core::method::MethodKind;
use crate::core::method::MethodValue;
use crate::interfaces::AssumptionFixture;
use crate::interfaces::FixtureError;

// ============================================================================
// SECTION: Method Entries
// ============================================================================

/// Zero-argument fixture method signature accepted by [`MethodTable::with_method`].
pub type MethodFn<T> = fn(&T) -> Result<MethodValue, FixtureError>;

/// Registered method body, kept as a plain function reference.
enum MethodBody<T> {
    /// Infallible boolean predicate.
    Predicate(fn(&T) -> bool),
    /// Boolean predicate whose body may fail.
    Fallible(fn(&T) -> Result<bool, FixtureError>),
    /// General method with an explicit declared kind.
    General(MethodFn<T>),
}

/// Registered fixture method with its declared return kind.
struct MethodEntry<T> {
    /// Declared return kind.
    kind: MethodKind,
    /// Method body invoked against the bound instance.
    body: MethodBody<T>,
}

// ============================================================================
// SECTION: Method Table
// ============================================================================

/// Explicit name-to-method mapping a test author supplies for a fixture type.
///
/// Registration replaces any previous entry under the same name, matching
/// the one-zero-argument-method-per-name shape of the lookup the gate
/// performs.
pub struct MethodTable<T> {
    /// Registered methods keyed by assumption name.
    methods: BTreeMap<String, MethodEntry<T>>,
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MethodTable<T> {
    /// Creates an empty method table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            methods: BTreeMap::new(),
        }
    }

    /// Registers a boolean predicate method.
    #[must_use]
    pub fn with_predicate(self, name: impl Into<String>, predicate: fn(&T) -> bool) -> Self {
        self.register(name, MethodKind::Boolean, MethodBody::Predicate(predicate))
    }

    /// Registers a boolean predicate whose body may fail.
    #[must_use]
    pub fn with_fallible_predicate(
        self,
        name: impl Into<String>,
        predicate: fn(&T) -> Result<bool, FixtureError>,
    ) -> Self {
        self.register(name, MethodKind::Boolean, MethodBody::Fallible(predicate))
    }

    /// Registers a zero-argument method with an explicit declared kind.
    #[must_use]
    pub fn with_method(
        self,
        name: impl Into<String>,
        kind: MethodKind,
        method: MethodFn<T>,
    ) -> Self {
        self.register(name, kind, MethodBody::General(method))
    }

    /// Returns the declared kind for a registered method name.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<MethodKind> {
        self.methods.get(name).map(|entry| entry.kind)
    }

    /// Returns the number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true when no methods are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Binds the table to a live fixture instance.
    #[must_use]
    pub fn bind<'a>(&'a self, instance: &'a T) -> BoundFixture<'a, T> {
        BoundFixture {
            table: self,
            instance,
        }
    }

    /// Inserts an entry, replacing any previous registration under the name.
    fn register(mut self, name: impl Into<String>, kind: MethodKind, body: MethodBody<T>) -> Self {
        self.methods.insert(name.into(), MethodEntry {
            kind,
            body,
        });
        self
    }
}

// ============================================================================
// SECTION: Bound Fixture
// ============================================================================

/// Method table bound to a live fixture instance.
pub struct BoundFixture<'a, T> {
    /// Method table consulted for resolution.
    table: &'a MethodTable<T>,
    /// Live fixture instance receiving invocations.
    instance: &'a T,
}

impl<T> AssumptionFixture for BoundFixture<'_, T> {
    fn resolve(&self, name: &AssumptionName) -> Option<MethodKind> {
        self.table.kind_of(name.as_str())
    }

    fn invoke(&self, name: &AssumptionName) -> Result<MethodValue, FixtureError> {
        let entry = self
            .table
            .methods
            .get(name.as_str())
            .ok_or_else(|| FixtureError::Failed(format!("no method registered for [{name}]")))?;
        match entry.body {
            MethodBody::Predicate(predicate) => Ok(MethodValue::Boolean(predicate(self.instance))),
            MethodBody::Fallible(predicate) => predicate(self.instance).map(MethodValue::Boolean),
            MethodBody::General(method) => method(self.instance),
        }
    }
}
