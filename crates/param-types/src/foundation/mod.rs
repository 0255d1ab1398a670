//! Core checking types and traits
//!
//! This module contains the building blocks every checker is made of:
//!
//! - **Values**: [`Value`], [`Object`], [`Class`], [`Symbol`], [`Function`]
//! - **Classification**: [`Kind`] and [`classify`]
//! - **Locations**: [`Location`], [`Site`]
//! - **Traits**: [`Checker`], [`CheckerExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigError`]
//!
//! # Architecture
//!
//! A checker looks at one [`Value`] at one [`Site`] and returns the first
//! mismatch it finds. Structural checkers descend into arrays and objects by
//! deriving a child site, so a failure deep inside an argument still names
//! the full path:
//!
//! ```text
//! Invalid property c of 0th parameter of type regexp supplied to iife, expected string.
//! ```

pub mod error;
pub mod kind;
pub mod location;
pub mod traits;
pub mod value;

pub use error::{ConfigError, ErrorKind, ValidationError, ValidationErrors};
pub use kind::{Kind, classify};
pub use location::{Location, Ordinal, Site};
pub use traits::{Checker, CheckerExt, DynChecker};
pub use value::{Class, Function, Object, Symbol, Value};

/// A check result using the standard [`ValidationError`].
pub type CheckResult = Result<(), ValidationError>;

/// Checks a single value as parameter `position` of `method`.
///
/// Convenient for one-off checks outside a parameter list.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// assert!(check_value(&number().required(), &Value::from(1), "inc", 0).is_ok());
/// ```
#[must_use = "check result must be used"]
pub fn check_value<C>(checker: &C, value: &Value, method: &str, position: usize) -> CheckResult
where
    C: Checker + ?Sized,
{
    checker.check(value, &Site::new(method, Location::param(position)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AlwaysValid;

    impl Checker for AlwaysValid {
        fn check_present(&self, _value: &Value, _site: &Site<'_>) -> CheckResult {
            Ok(())
        }
    }

    #[test]
    fn test_check_value() {
        assert!(check_value(&AlwaysValid, &Value::from(1), "m", 0).is_ok());
    }

    #[test]
    fn test_check_value_unsized() {
        let erased: DynChecker = AlwaysValid.boxed();
        assert!(check_value(erased.as_ref(), &Value::Null, "m", 0).is_ok());
    }
}
