//! Core traits for the checking system
//!
//! [`Checker`] is the single trait every type checker implements.
//! [`CheckerExt`] adds the modifier methods (`required`, `nullable`, `rest`)
//! to every checker, so compositions read left to right:
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let ids = array_of(number().required()).required();
//! let hobbies = string().rest();
//! ```

use crate::foundation::location::Site;
use crate::foundation::{ValidationError, Value};
use std::fmt::Debug;
use std::sync::Arc;

// ============================================================================
// CORE CHECKER TRAIT
// ============================================================================

/// A composable predicate over one value that explains its failures.
///
/// Checkers are immutable after construction and hold no per-call state, so
/// they are `Send + Sync` and may be shared by any number of validators.
///
/// # Optional by default
///
/// Implementors write [`check_present`](Checker::check_present), which only
/// ever sees values that are neither `null` nor `undefined`. The provided
/// [`check`](Checker::check) lets missing values through; the
/// [`Required`](crate::combinators::Required) modifier turns that into a
/// failure.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::foundation::{Checker, Site, ValidationError, Value, Kind};
///
/// #[derive(Debug)]
/// struct Positive;
///
/// impl Checker for Positive {
///     fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
///         match value {
///             Value::Number(n) if *n > 0.0 => Ok(()),
///             other => Err(ValidationError::type_mismatch(site, Kind::Number, other.kind())),
///         }
///     }
/// }
/// ```
pub trait Checker: Send + Sync + Debug {
    /// Checks a value that is known to be present.
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError>;

    /// Checks any value. `null` and `undefined` pass.
    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if value.is_nullish() {
            Ok(())
        } else {
            self.check_present(value, site)
        }
    }

    /// Whether this checker consumes all remaining arguments.
    fn is_rest(&self) -> bool {
        false
    }
}

/// A shared, type-erased checker, as stored in unions, shapes and
/// parameter lists.
pub type DynChecker = Arc<dyn Checker>;

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        (**self).check_present(value, site)
    }

    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        (**self).check(value, site)
    }

    fn is_rest(&self) -> bool {
        (**self).is_rest()
    }
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        (**self).check_present(value, site)
    }

    fn check(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        (**self).check(value, site)
    }

    fn is_rest(&self) -> bool {
        (**self).is_rest()
    }
}

// ============================================================================
// CHECKER EXTENSION TRAIT
// ============================================================================

/// Modifier methods available on every checker.
pub trait CheckerExt: Checker + Sized {
    /// Fails on `null`/`undefined` instead of letting them through.
    fn required(self) -> Required<Self> {
        Required::new(self)
    }

    /// Always passes `null`/`undefined`, even over a required checker.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Marks the checker as validating all remaining arguments.
    fn rest(self) -> Rest<Self> {
        Rest::new(self)
    }

    /// Erases the checker's type.
    fn boxed(self) -> DynChecker
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Checker> CheckerExt for T {}

pub use crate::combinators::nullable::Nullable;
pub use crate::combinators::required::Required;
pub use crate::combinators::rest::Rest;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Kind, Location};

    #[derive(Debug)]
    struct AlwaysFails;

    impl Checker for AlwaysFails {
        fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
            Err(ValidationError::type_mismatch(site, Kind::Symbol, value.kind()))
        }
    }

    #[test]
    fn test_missing_values_skip_the_check() {
        let site = Site::new("m", Location::param(0));
        assert!(AlwaysFails.check(&Value::Null, &site).is_ok());
        assert!(AlwaysFails.check(&Value::Undefined, &site).is_ok());
        assert!(AlwaysFails.check(&Value::from(1), &site).is_err());
    }

    #[test]
    fn test_boxed_forwards() {
        let site = Site::new("m", Location::param(0));
        let boxed = AlwaysFails.rest().boxed();
        assert!(boxed.is_rest());
        assert!(boxed.check(&Value::Undefined, &site).is_ok());
        assert!(boxed.check(&Value::from("x"), &site).is_err());
    }
}
