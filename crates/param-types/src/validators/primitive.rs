//! Kind validators
//!
//! One checker per [`Kind`], plus [`Any`] which accepts every present value.

use crate::foundation::{Checker, Kind, Site, ValidationError, Value};

/// Validates that a value classifies as `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindOf {
    expected: Kind,
}

impl KindOf {
    #[must_use]
    pub const fn new(expected: Kind) -> Self {
        Self { expected }
    }

    #[must_use]
    pub const fn expected(&self) -> Kind {
        self.expected
    }
}

impl Checker for KindOf {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        let actual = value.kind();
        if actual == self.expected {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(site, self.expected, actual))
        }
    }
}

/// Creates a [`KindOf`] for an arbitrary kind.
#[must_use]
pub const fn kind_of(expected: Kind) -> KindOf {
    KindOf::new(expected)
}

#[must_use]
pub const fn array() -> KindOf {
    KindOf::new(Kind::Array)
}

#[must_use]
pub const fn bool() -> KindOf {
    KindOf::new(Kind::Boolean)
}

#[must_use]
pub const fn func() -> KindOf {
    KindOf::new(Kind::Function)
}

#[must_use]
pub const fn number() -> KindOf {
    KindOf::new(Kind::Number)
}

/// Plain objects only; arrays, dates and regexps have their own kinds.
#[must_use]
pub const fn object() -> KindOf {
    KindOf::new(Kind::Object)
}

#[must_use]
pub const fn string() -> KindOf {
    KindOf::new(Kind::String)
}

#[must_use]
pub const fn symbol() -> KindOf {
    KindOf::new(Kind::Symbol)
}

#[must_use]
pub const fn date() -> KindOf {
    KindOf::new(Kind::Date)
}

#[must_use]
pub const fn regexp() -> KindOf {
    KindOf::new(Kind::RegExp)
}

/// Accepts every value. Useful as `any().required()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Any;

impl Checker for Any {
    fn check_present(&self, _value: &Value, _site: &Site<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[must_use]
pub const fn any() -> Any {
    Any
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{CheckerExt, Function, Location, Object, Symbol};
    use chrono::Utc;
    use regex::Regex;

    fn passes(checker: &impl Checker, value: Value) -> bool {
        checker
            .check(&value, &Site::new("iife", Location::param(0)))
            .is_ok()
    }

    fn noop() -> Value {
        Function::new(|_| Value::Undefined).into()
    }

    #[test]
    fn test_number() {
        let checker = number().required();
        for n in [1.0, 0.0, -1.0, 1.5, -1.5, f64::NAN] {
            assert!(passes(&checker, n.into()));
        }
        assert!(!passes(&checker, "0".into()));
        assert!(!passes(&checker, Value::Array(vec![])));
    }

    #[test]
    fn test_containers_are_not_objects() {
        let checker = object().required();
        assert!(passes(&checker, Object::new().into()));
        assert!(passes(&checker, Object::new().with("key", "value").into()));
        assert!(!passes(&checker, Value::Array(vec![])));
        assert!(!passes(&checker, Utc::now().into()));
        assert!(!passes(&checker, "".into()));
    }

    #[test]
    fn test_date_and_regexp() {
        assert!(passes(&date(), Utc::now().into()));
        assert!(!passes(&date(), Value::from(vec![Value::from(Utc::now())])));
        assert!(passes(&regexp(), Regex::new("a").unwrap().into()));
        assert!(!passes(&regexp(), noop()));
    }

    #[test]
    fn test_symbol_bool_func() {
        assert!(passes(&symbol(), Symbol::new("something").into()));
        assert!(!passes(&symbol(), 1.into()));
        assert!(passes(&bool(), false.into()));
        assert!(!passes(&bool(), 0.into()));
        assert!(passes(&func(), noop()));
        assert!(!passes(&func(), Object::new().into()));
    }

    #[test]
    fn test_any() {
        let checker = any().required();
        for value in [Value::from(0), "".into(), Value::Array(vec![]), noop()] {
            assert!(passes(&checker, value));
        }
        assert!(!passes(&checker, Value::Undefined));
    }

    #[test]
    fn test_kind_of_matches_named_constructor() {
        assert_eq!(kind_of(Kind::String), string());
        assert_eq!(array().expected(), Kind::Array);
    }
}
