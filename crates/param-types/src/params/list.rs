//! The ordered checker list bound to one method.

use crate::foundation::{ConfigError, DynChecker, Location, Site, ValidationError, Value};
use std::borrow::Cow;
use std::ops::ControlFlow;

static UNDEFINED: Value = Value::Undefined;

/// Checkers for a method's parameters, in positional order.
///
/// At most the last checker may carry the rest marker; that invariant is
/// enforced by [`ParamList::new`], so a `ParamList` that exists is always
/// well formed.
#[derive(Debug, Clone)]
pub struct ParamList {
    method: Cow<'static, str>,
    checkers: Vec<DynChecker>,
}

impl ParamList {
    /// Binds `checkers` to `method`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RestNotLast`] if any checker but the last is a rest
    /// checker; `position` is the zero-based index of the first one.
    pub fn new(
        method: impl Into<Cow<'static, str>>,
        checkers: impl IntoIterator<Item = DynChecker>,
    ) -> Result<Self, ConfigError> {
        let method = method.into();
        let checkers: Vec<DynChecker> = checkers.into_iter().collect();

        let leading = checkers.len().saturating_sub(1);
        if let Some(position) = checkers[..leading].iter().position(|c| c.is_rest()) {
            return Err(ConfigError::RestNotLast {
                method: method.into_owned(),
                position,
            });
        }

        Ok(Self { method, checkers })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn checkers(&self) -> &[DynChecker] {
        &self.checkers
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Whether the last checker consumes the remaining arguments.
    pub fn has_rest(&self) -> bool {
        self.checkers.last().is_some_and(|c| c.is_rest())
    }

    /// Checks `args` position by position, handing every failure to
    /// `on_failure`. Stops as soon as `on_failure` breaks.
    ///
    /// Arguments past the end of `args` read as `undefined`; arguments past
    /// the last non-rest checker are ignored.
    pub(crate) fn run<B>(
        &self,
        args: &[Value],
        mut on_failure: impl FnMut(ValidationError) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let last = self.checkers.len().saturating_sub(1);

        for (position, checker) in self.checkers.iter().enumerate() {
            if position == last && checker.is_rest() {
                for (index, value) in args.iter().enumerate().skip(position) {
                    let site = Site::new(&self.method, Location::param(index));
                    if let Err(error) = checker.check(value, &site) {
                        on_failure(error)?;
                    }
                }
                break;
            }

            let value = args.get(position).unwrap_or(&UNDEFINED);
            let site = Site::new(&self.method, Location::param(position));
            if let Err(error) = checker.check(value, &site) {
                on_failure(error)?;
            }
        }

        ControlFlow::Continue(())
    }
}
