//! Throw-on-first-failure policy.

use crate::foundation::{ValidationError, Value};
use crate::params::ParamList;
use std::ops::ControlFlow;

/// A validator that stops at the first failing position.
///
/// Positions after the failing one, including the remaining rest arguments,
/// are never checked.
#[derive(Debug, Clone)]
pub struct StrictValidator {
    params: Option<ParamList>,
}

impl StrictValidator {
    pub fn new(params: ParamList) -> Self {
        Self {
            params: Some(params),
        }
    }

    /// A validator that accepts every call without checking.
    pub fn disabled() -> Self {
        Self { params: None }
    }

    pub fn is_active(&self) -> bool {
        self.params.is_some()
    }

    pub fn params(&self) -> Option<&ParamList> {
        self.params.as_ref()
    }

    /// Validates one call's arguments.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] in positional order.
    pub fn call(&self, args: &[Value]) -> Result<(), ValidationError> {
        let Some(params) = &self.params else {
            return Ok(());
        };

        match params.run(args, ControlFlow::Break) {
            ControlFlow::Break(error) => Err(error),
            ControlFlow::Continue(()) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CheckerExt;
    use crate::validators::{number, string};

    #[test]
    fn test_first_failure_wins() {
        let list = ParamList::new(
            "iife",
            [string().required().boxed(), number().required().rest().boxed()],
        )
        .unwrap();
        let validator = StrictValidator::new(list);

        assert!(validator.call(&["1".into(), 2.into(), 3.into()]).is_ok());

        let err = validator
            .call(&["1".into(), 2.into(), "3".into(), "4".into()])
            .unwrap_err();
        assert_eq!(err.location, "2nd");
    }

    #[test]
    fn test_disabled_accepts_everything() {
        let validator = StrictValidator::disabled();
        assert!(!validator.is_active());
        assert!(validator.call(&[Value::Null]).is_ok());
    }
}
