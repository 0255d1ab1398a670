//! Prelude module for convenient imports.
//!
//! `use param_types::prelude::*;` brings in the checker traits, every
//! built-in checker and combinator, the validator builders and the list
//! macros.
//!
//! # Examples
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let set_name = validate("setName", checkers![string().required()])?;
//! let errors = set_name.call(&args![42]);
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    CheckResult, Checker, CheckerExt, Class, ConfigError, DynChecker, ErrorKind, Function, Kind,
    Location, Object, Site, Symbol, ValidationError, ValidationErrors, Value, check_value,
    classify,
};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::validators::{
    Any, InstanceOf, KindOf, OneOf, any, array, bool, date, func, instance_of, kind_of, number,
    object, one_of, regexp, string, symbol,
};

pub use crate::combinators::{
    ArrayOf, Nullable, ObjectOf, OneOfType, Required, Rest, Shape, array_of, nullable, object_of,
    one_of_type, required, rest_of, shape,
};

// ============================================================================
// VALIDATOR FACTORY AND CONFIGURATION
// ============================================================================

pub use crate::config::{BuildProfile, FailureSink, ValidatorConfig};
pub use crate::params::{
    LoggingValidator, ParamList, StrictValidator, validate, validate_with, validate_with_errors,
    validate_with_errors_with,
};

pub use crate::{args, checkers};
