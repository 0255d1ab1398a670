//! Log-and-continue policy.

use crate::config::FailureSink;
use crate::foundation::{ValidationError, ValidationErrors, Value};
use crate::params::ParamList;
use std::fmt;
use std::ops::ControlFlow;

/// A validator that checks every position and reports every failure.
///
/// Each failure is emitted as a `tracing` warning (target `param_types`),
/// handed to the configured [`FailureSink`] if any, and returned to the
/// caller. Calling it never fails.
#[derive(Clone)]
pub struct LoggingValidator {
    params: Option<ParamList>,
    sink: Option<FailureSink>,
}

impl LoggingValidator {
    pub fn new(params: ParamList, sink: Option<FailureSink>) -> Self {
        Self {
            params: Some(params),
            sink,
        }
    }

    /// A validator that accepts every call without checking.
    pub fn disabled() -> Self {
        Self {
            params: None,
            sink: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.params.is_some()
    }

    pub fn params(&self) -> Option<&ParamList> {
        self.params.as_ref()
    }

    /// Validates one call's arguments and returns the failures, one per
    /// failing position or rest argument.
    pub fn call(&self, args: &[Value]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Some(params) = &self.params {
            let _ = params.run::<()>(args, |error| {
                self.report(&error);
                errors.add(error);
                ControlFlow::Continue(())
            });
        }
        errors
    }

    fn report(&self, error: &ValidationError) {
        tracing::warn!(
            target: "param_types",
            method = %error.method,
            location = %error.location,
            code = %error.code,
            "{}",
            error.message
        );
        if let Some(sink) = &self.sink {
            sink(error);
        }
    }
}

impl fmt::Debug for LoggingValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingValidator")
            .field("params", &self.params)
            .field("sink", &self.sink.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CheckerExt;
    use crate::validators::{number, string};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_reports_every_failure() {
        let list = ParamList::new(
            "iife",
            [string().required().boxed(), number().rest().boxed()],
        )
        .unwrap();
        let validator = LoggingValidator::new(list, None);

        let errors = validator.call(&[1.into(), "2".into(), 3.into(), "4".into()]);
        let locations: Vec<&str> = errors.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(locations, ["0th", "1st", "3rd"]);
    }

    #[test]
    fn test_sink_sees_each_failure() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let sink: FailureSink = Arc::new(move |_: &ValidationError| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let list = ParamList::new("iife", [number().required().boxed()]).unwrap();
        let validator = LoggingValidator::new(list, Some(sink));

        assert!(validator.call(&[1.into()]).is_empty());
        assert_eq!(validator.call(&[]).len(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
