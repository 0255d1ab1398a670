//! NULLABLE modifier - the outermost override for missing values

use crate::foundation::{Checker, Site, ValidationError, Value};

/// Lets `null` and `undefined` pass unconditionally.
///
/// Unlike a plain checker, `Nullable` also wins over an inner
/// [`Required`](super::Required): `nullable(string().required())` accepts
/// `null`. Present values are checked by the inner checker as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<V> {
    pub(crate) inner: V,
}

impl<V> Nullable<V> {
    /// Creates a new `Nullable` modifier.
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

impl<V: Checker> Checker for Nullable<V> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        self.inner.check_present(value, site)
    }

    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if value.is_nullish() {
            Ok(())
        } else {
            self.inner.check(value, site)
        }
    }

    fn is_rest(&self) -> bool {
        self.inner.is_rest()
    }
}

/// Creates a `Nullable` modifier.
pub fn nullable<V: Checker>(checker: V) -> Nullable<V> {
    Nullable::new(checker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{CheckerExt, Location};
    use crate::validators::string;

    #[test]
    fn test_nullable_overrides_required() {
        let site = Site::new("iife", Location::param(0));
        let checker = nullable(string().required());
        assert!(checker.check(&Value::Null, &site).is_ok());
        assert!(checker.check(&Value::Undefined, &site).is_ok());
        assert!(checker.check(&Value::from("x"), &site).is_ok());
        assert!(checker.check(&Value::from(1), &site).is_err());
    }

    #[test]
    fn test_required_outside_nullable_still_requires() {
        let site = Site::new("iife", Location::param(0));
        let checker = nullable(string()).required();
        assert!(checker.check(&Value::Null, &site).is_err());
    }
}
