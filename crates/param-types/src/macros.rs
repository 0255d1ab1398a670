//! Macros for building argument and checker lists.
//!
//! - [`args!`]: a `Vec<Value>` from anything convertible into [`Value`]
//! - [`checkers!`]: a `Vec<DynChecker>` from any checkers
//!
//! [`Value`]: crate::foundation::Value
//!
//! # Examples
//!
//! ```
//! use param_types::prelude::*;
//!
//! let validator = validate_with_errors_with(
//!     &ValidatorConfig::active(),
//!     "constructor",
//!     checkers![string(), number(), string().rest()],
//! )
//! .unwrap();
//!
//! assert!(validator.call(&args!["Shin Lu", 18, "movie", "reading"]).is_ok());
//! assert!(validator.call(&args!["Shin Lu", "18"]).is_err());
//! ```

/// Builds a `Vec<Value>` argument list.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::foundation::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::foundation::Value::from($value)),+]
    };
}

/// Builds a `Vec<DynChecker>` from checkers of any type.
#[macro_export]
macro_rules! checkers {
    ($($checker:expr),* $(,)?) => {{
        let list: ::std::vec::Vec<$crate::foundation::DynChecker> =
            ::std::vec![$($crate::foundation::CheckerExt::boxed($checker)),*];
        list
    }};
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Checker, Value};
    use crate::validators::{number, string};

    #[test]
    fn test_args_macro() {
        let empty = args![];
        assert!(empty.is_empty());

        let list = args![1, "two", Value::Null, vec![3]];
        assert_eq!(list.len(), 4);
        assert!(list[1].strict_eq(&Value::from("two")));
    }

    #[test]
    fn test_checkers_macro() {
        use crate::foundation::CheckerExt;

        let list = checkers![number(), string().rest()];
        assert_eq!(list.len(), 2);
        assert!(list[1].is_rest());
        assert!(checkers![].is_empty());
    }
}
