//! REQUIRED modifier - rejects `null` and `undefined`

use crate::foundation::{Checker, Site, ValidationError, Value};

/// Makes a checker fail on missing values.
///
/// Every checker lets `null`/`undefined` through on its own; wrapping it in
/// `Required` reports a [`MissingRequired`](crate::foundation::ErrorKind::MissingRequired)
/// failure instead. Present values are delegated unchanged, and the rest
/// marker of the inner checker is preserved.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let name = string().required();
/// assert!(check_value(&name, &Value::Null, "setName", 0).is_err());
/// assert!(check_value(&name, &Value::from("Shin"), "setName", 0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required<V> {
    pub(crate) inner: V,
}

impl<V> Required<V> {
    /// Creates a new `Required` modifier.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Consumes the modifier and returns the inner checker.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Checker> Checker for Required<V> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        self.inner.check_present(value, site)
    }

    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if value.is_nullish() {
            Err(ValidationError::required(site))
        } else {
            self.inner.check(value, site)
        }
    }

    fn is_rest(&self) -> bool {
        self.inner.is_rest()
    }
}

/// Creates a `Required` modifier.
pub fn required<V: Checker>(checker: V) -> Required<V> {
    Required::new(checker)
}
