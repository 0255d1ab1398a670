//! Checker combinators and modifiers
//!
//! Structural combinators close over child checkers and descend into the
//! value; modifiers wrap a single checker and change how missing values or
//! rest positions are treated.
//!
//! # Structural
//!
//! - [`ArrayOf`] - every element of an array
//! - [`ObjectOf`] - every property value of an object
//! - [`Shape`] - selected properties of an object, each with its own checker
//! - [`OneOfType`] - at least one of several checkers
//!
//! # Modifiers
//!
//! - [`Required`] - `null`/`undefined` fail
//! - [`Nullable`] - `null`/`undefined` always pass, overriding `Required`
//! - [`Rest`] - applies to all remaining arguments of a parameter list
//!
//! # Examples
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let tags = array_of(string().required()).required();
//! let options = Shape::new()
//!     .field("retries", number())
//!     .field("labels", object_of(string()))
//!     .nullable();
//! ```

pub mod array_of;
pub mod nullable;
pub mod object_of;
pub mod one_of_type;
pub mod required;
pub mod rest;
pub mod shape;

pub use array_of::{ArrayOf, array_of};
pub use nullable::{Nullable, nullable};
pub use object_of::{ObjectOf, object_of};
pub use one_of_type::{OneOfType, one_of_type};
pub use required::{Required, required};
pub use rest::{Rest, rest_of};
pub use shape::{Shape, shape};
