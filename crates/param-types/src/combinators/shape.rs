//! SHAPE combinator - per-key checks on an object
//!
//! A shape is non-exhaustive in both directions: properties without a
//! checker are ignored, and checkers whose key is absent from the value are
//! skipped, even when they are required.

use crate::foundation::{Checker, CheckerExt, DynChecker, Kind, Site, ValidationError, Value};
use indexmap::IndexMap;

/// Validates selected properties of an object.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let point = Shape::new()
///     .field("x", number().required())
///     .field("y", number().required());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: IndexMap<String, DynChecker>,
}

impl Shape {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the checker for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<C>(mut self, key: impl Into<String>, checker: C) -> Self
    where
        C: Checker + 'static,
    {
        self.fields.insert(key.into(), checker.boxed());
        self
    }

    pub fn get(&self, key: &str) -> Option<&DynChecker> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Checker for Shape {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(ValidationError::type_mismatch(site, Kind::Object, other.kind())),
        };

        // Value order, not declaration order: "first failing key" follows the object.
        for (key, item) in object.iter() {
            if let Some(checker) = self.fields.get(key) {
                checker.check(item, &site.property(key))?;
            }
        }
        Ok(())
    }
}

/// Creates a `Shape` from `(key, checker)` pairs.
pub fn shape<K, I>(fields: I) -> Shape
where
    K: Into<String>,
    I: IntoIterator<Item = (K, DynChecker)>,
{
    Shape {
        fields: fields.into_iter().map(|(k, c)| (k.into(), c)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{CheckerExt, Location, Object};
    use crate::validators::{number, string};
    use chrono::Utc;
    use regex::Regex;

    fn site() -> Site<'static> {
        Site::new("iife", Location::param(0))
    }

    fn sample() -> Value {
        Object::new()
            .with("a", 1)
            .with("b", "b")
            .with("c", Regex::new("c").unwrap())
            .with("d", Utc::now())
            .into()
    }

    #[test]
    fn test_shape_ignores_unlisted_keys() {
        let checker = Shape::new().field("a", number()).field("b", string());
        assert!(checker.check(&sample(), &site()).is_ok());
    }

    #[test]
    fn test_shape_names_failing_key() {
        let checker = Shape::new().field("a", number()).field("c", string());
        let err = checker.check(&sample(), &site()).unwrap_err();
        assert_eq!(err.location, "property c of 0th");
        assert_eq!(err.param("actual"), Some("regexp"));
    }

    #[test]
    fn test_shape_follows_value_order() {
        let value: Value = Object::new().with("late", 1).with("early", 2).into();
        let checker = shape([("early", string().boxed()), ("late", string().boxed())]);
        let err = checker.check(&value, &site()).unwrap_err();
        assert_eq!(err.location, "property late of 0th");
    }

    #[test]
    fn test_shape_skips_absent_required_keys() {
        // Absent keys are never checked, required or not.
        let checker = Shape::new().field("missing", number().required());
        assert!(checker.check(&Object::new().into(), &site()).is_ok());

        let present_null: Value = Object::new().with("missing", Value::Null).into();
        assert!(checker.check(&present_null, &site()).is_err());
    }

    #[test]
    fn test_shape_rejects_non_objects() {
        for value in [Value::from(1), Value::from("0"), Value::Array(vec![])] {
            assert!(Shape::new().check(&value, &site()).is_err());
        }
    }
}
