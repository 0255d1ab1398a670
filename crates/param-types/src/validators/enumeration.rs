//! Enum-membership validator

use crate::foundation::{Checker, Site, ValidationError, Value};

/// Validates that a value strictly equals one of a fixed list of values.
///
/// Equality is [`Value::strict_eq`], except that `NaN` matches `NaN`.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<Value>,
    // JSON rendering of `allowed`, computed once for failure messages.
    rendered: String,
}

impl OneOf {
    pub fn new(allowed: Vec<Value>) -> Self {
        let rendered = Value::Array(allowed.clone()).to_json().to_string();
        Self { allowed, rendered }
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    fn contains(&self, value: &Value) -> bool {
        self.allowed
            .iter()
            .any(|candidate| candidate.strict_eq(value) || (candidate.is_nan() && value.is_nan()))
    }
}

impl Checker for OneOf {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::not_one_of(site, value, &self.rendered))
        }
    }
}

/// Creates a `OneOf` validator.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let level = one_of(["debug", "info", "warn"]);
/// ```
pub fn one_of<I>(allowed: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(allowed.into_iter().map(Into::into).collect())
}
