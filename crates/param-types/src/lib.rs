//! # param-types
//!
//! Runtime type checking for function arguments.
//!
//! Describe what a method expects as an ordered list of checkers, build a
//! validator once, and call it with each argument list. The validator
//! reports the first mismatch per position, naming the method, the location
//! and what was expected.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let constructor = validate_with_errors(
//!     "constructor",
//!     checkers![string().required(), number(), string().rest()],
//! )?;
//!
//! constructor.call(&args!["Shin Lu", 18, "movie", "reading"])?;
//! ```
//!
//! ## Building Blocks
//!
//! - **Kinds**: [`number`](validators::number), [`string`](validators::string),
//!   [`array`](validators::array), [`date`](validators::date), ... and
//!   [`any`](validators::any)
//! - **Values**: [`one_of`](validators::one_of),
//!   [`instance_of`](validators::instance_of)
//! - **Structure**: [`array_of`](combinators::array_of),
//!   [`object_of`](combinators::object_of), [`Shape`](combinators::Shape),
//!   [`one_of_type`](combinators::one_of_type)
//! - **Modifiers**: `.required()`, `.nullable()`, `.rest()` from
//!   [`CheckerExt`](foundation::CheckerExt)
//!
//! ## Failure Policies
//!
//! [`validate_with_errors`](params::validate_with_errors) stops at the first
//! failure and returns it. [`validate`](params::validate) checks every
//! position, emits each failure through `tracing` and returns them all.
//! Either can be built disabled through
//! [`BuildProfile`](config::BuildProfile), in which case calls cost nothing.

pub mod combinators;
pub mod config;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod params;
pub mod prelude;
pub mod validators;
