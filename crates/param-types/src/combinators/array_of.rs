//! ARRAY_OF combinator - validates every element of an array

use crate::foundation::{Checker, Kind, Site, ValidationError, Value};

/// Validates that a value is an array whose elements all pass `element`.
///
/// Elements are checked in index order and the first failure is returned,
/// with its location extended to name the element (`1st element of 0th`).
/// Array-like objects are rejected with a type mismatch.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let ids = array_of(number().required());
/// assert!(check_value(&ids, &args![1, 2, 3].into(), "load", 0).is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V> {
    element: V,
}

impl<V> ArrayOf<V> {
    /// Creates a new `ArrayOf` combinator.
    pub fn new(element: V) -> Self {
        Self { element }
    }

    /// Returns a reference to the element checker.
    pub fn element(&self) -> &V {
        &self.element
    }

    /// Consumes the combinator and returns the element checker.
    pub fn into_inner(self) -> V {
        self.element
    }
}

impl<V: Checker> Checker for ArrayOf<V> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ValidationError::type_mismatch(site, Kind::Array, other.kind())),
        };

        for (index, item) in items.iter().enumerate() {
            self.element.check(item, &site.element(index))?;
        }
        Ok(())
    }
}

/// Creates an `ArrayOf` combinator.
pub fn array_of<V: Checker>(element: V) -> ArrayOf<V> {
    ArrayOf::new(element)
}

// ============================================================================
// TESTS
// ============================================================================
