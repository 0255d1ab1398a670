//! Parameter-list validators
//!
//! A [`ParamList`] binds an ordered list of checkers to a method name. The
//! checker at index `i` validates argument `i`; a rest checker in last
//! position validates every argument from its index on.
//!
//! Two failure policies wrap a list:
//!
//! - [`StrictValidator`] ([`validate_with_errors`]) returns the first failure
//!   and checks nothing after it.
//! - [`LoggingValidator`] ([`validate`]) checks every position, logs each
//!   failure and returns them all.
//!
//! Both builders honour the [`BuildProfile`](crate::config::BuildProfile) of
//! their configuration: a disabled profile yields a validator that never
//! checks anything.
//!
//! # Examples
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let person = validate_with_errors(
//!     "Person",
//!     checkers![string(), number(), string().rest()],
//! )?;
//!
//! person.call(&args!["Shin Lu", 18, "movie", "reading"])?;
//! ```

pub mod list;
pub mod logging;
pub mod strict;

pub use list::ParamList;
pub use logging::LoggingValidator;
pub use strict::StrictValidator;

use crate::config::ValidatorConfig;
use crate::foundation::{ConfigError, DynChecker};
use std::borrow::Cow;

/// Builds a log-and-continue validator with the default configuration.
pub fn validate(
    method: impl Into<Cow<'static, str>>,
    checkers: impl IntoIterator<Item = DynChecker>,
) -> Result<LoggingValidator, ConfigError> {
    validate_with(&ValidatorConfig::default(), method, checkers)
}

/// Builds a log-and-continue validator.
///
/// # Errors
///
/// [`ConfigError::RestNotLast`] if a rest checker is not last. A disabled
/// profile skips this check along with everything else.
pub fn validate_with(
    config: &ValidatorConfig,
    method: impl Into<Cow<'static, str>>,
    checkers: impl IntoIterator<Item = DynChecker>,
) -> Result<LoggingValidator, ConfigError> {
    let method = method.into();
    if !config.profile.is_active() {
        tracing::debug!(target: "param_types", %method, "validation disabled");
        return Ok(LoggingValidator::disabled());
    }
    Ok(LoggingValidator::new(
        ParamList::new(method, checkers)?,
        config.sink.clone(),
    ))
}

/// Builds a fail-fast validator with the default configuration.
pub fn validate_with_errors(
    method: impl Into<Cow<'static, str>>,
    checkers: impl IntoIterator<Item = DynChecker>,
) -> Result<StrictValidator, ConfigError> {
    validate_with_errors_with(&ValidatorConfig::default(), method, checkers)
}

/// Builds a fail-fast validator.
///
/// # Errors
///
/// Same as [`validate_with`].
pub fn validate_with_errors_with(
    config: &ValidatorConfig,
    method: impl Into<Cow<'static, str>>,
    checkers: impl IntoIterator<Item = DynChecker>,
) -> Result<StrictValidator, ConfigError> {
    let method = method.into();
    if !config.profile.is_active() {
        tracing::debug!(target: "param_types", %method, "validation disabled");
        return Ok(StrictValidator::disabled());
    }
    Ok(StrictValidator::new(ParamList::new(method, checkers)?))
}
