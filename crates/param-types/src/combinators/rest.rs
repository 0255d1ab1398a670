//! REST marker - one checker for all remaining arguments

use crate::foundation::{Checker, Site, ValidationError, Value};

/// Marks a checker as applying to every argument from its position on.
///
/// The marker has no effect on a single value: `Rest` delegates straight to
/// the inner checker. Only [`ParamList`](crate::params::ParamList) reads it,
/// and only in last position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rest<V> {
    pub(crate) inner: V,
}

impl<V> Rest<V> {
    /// Creates a new `Rest` marker.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner checker.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Checker> Checker for Rest<V> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        self.inner.check_present(value, site)
    }

    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        self.inner.check(value, site)
    }

    fn is_rest(&self) -> bool {
        true
    }
}

/// Creates a `Rest` marker around `checker`.
pub fn rest_of<V: Checker>(checker: V) -> Rest<V> {
    Rest::new(checker)
}
