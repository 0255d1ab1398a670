//! ONE_OF_TYPE combinator - union of checkers

use crate::foundation::{Checker, DynChecker, Site, ValidationError, Value};

/// Passes if at least one checker in the list passes.
///
/// Alternatives are tried in order and the first success short-circuits.
/// When all fail, their individual errors are discarded and a single
/// `no_matching_type` failure naming the value is returned. An empty union
/// rejects every present value.
#[derive(Debug, Clone)]
pub struct OneOfType {
    alternatives: Vec<DynChecker>,
}

impl OneOfType {
    /// Creates a new `OneOfType` union.
    pub fn new(alternatives: Vec<DynChecker>) -> Self {
        Self { alternatives }
    }

    pub fn alternatives(&self) -> &[DynChecker] {
        &self.alternatives
    }
}

impl Checker for OneOfType {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if self
            .alternatives
            .iter()
            .any(|alternative| alternative.check(value, site).is_ok())
        {
            Ok(())
        } else {
            Err(ValidationError::no_matching_type(
                site,
                value,
                self.alternatives.len(),
            ))
        }
    }
}

/// Creates a `OneOfType` union.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let when = one_of_type(checkers![number(), string(), date()]);
/// ```
pub fn one_of_type(alternatives: impl IntoIterator<Item = DynChecker>) -> OneOfType {
    OneOfType::new(alternatives.into_iter().collect())
}
